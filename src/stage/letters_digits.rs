//! stage/letters_digits.rs
//! Latin letters and digits shift between ASCII and U+FF10..U+FF5A by the
//! fixed full-width offset. Pure 1→1 mappings, fusable.

use crate::{
    stage::{CharMapper, char_mapper_stage},
    unicode::{is_fullwidth_digit, is_fullwidth_letter, shift_to_ascii, shift_to_fullwidth},
};

/// `Ａ-Ｚａ-ｚ` → `A-Za-z`
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowLetters;

impl CharMapper for NarrowLetters {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if is_fullwidth_letter(c) {
            shift_to_ascii(c)
        } else {
            c
        }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        !text.is_ascii() && text.chars().any(is_fullwidth_letter)
    }
}

char_mapper_stage!(NarrowLetters, "narrow_letters");

/// `０-９` → `0-9`
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowDigits;

impl CharMapper for NarrowDigits {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if is_fullwidth_digit(c) {
            shift_to_ascii(c)
        } else {
            c
        }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        !text.is_ascii() && text.chars().any(is_fullwidth_digit)
    }
}

char_mapper_stage!(NarrowDigits, "narrow_digits");

/// `A-Za-z` → `Ａ-Ｚａ-ｚ`
#[derive(Debug, Default, Clone, Copy)]
pub struct WidenLetters;

impl CharMapper for WidenLetters {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if c.is_ascii_alphabetic() {
            shift_to_fullwidth(c)
        } else {
            c
        }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        text.bytes().any(|b| b.is_ascii_alphabetic())
    }
}

char_mapper_stage!(WidenLetters, "widen_letters");

/// `0-9` → `０-９`
#[derive(Debug, Default, Clone, Copy)]
pub struct WidenDigits;

impl CharMapper for WidenDigits {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if c.is_ascii_digit() {
            shift_to_fullwidth(c)
        } else {
            c
        }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        text.bytes().any(|b| b.is_ascii_digit())
    }
}

char_mapper_stage!(WidenDigits, "widen_digits");
