//! stage/punctuation.rs
//! ASCII punctuation ↔ full-width forms by the fixed offset. Pure 1→1, fusable.

use crate::{
    stage::{CharMapper, char_mapper_stage},
    unicode::{
        is_canonical_punctuation, is_fullwidth_punctuation, shift_to_ascii, shift_to_fullwidth,
    },
};

/// Full-width punctuation → ASCII by the fixed full-width offset.
///
/// | Full-width | ASCII |
/// |------------|-------|
/// | `！＂＃＄％＆＇（）＊＋，－．／` | ``!"#$%&'()*+,-./`` |
/// | `：；＜＝＞？＠` | `:;<=>?@` |
/// | `［＼］＾＿｀` | ``[\]^_` `` |
/// | `｛｜｝` | `{\|}` |
///
/// Runs last in the narrowing order: `＂`, `＇` and `－` have normally been
/// consumed by the quote and dash stages already.
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowPunctuation;

impl CharMapper for NarrowPunctuation {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if is_fullwidth_punctuation(c) {
            shift_to_ascii(c)
        } else {
            c
        }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        !text.is_ascii() && text.chars().any(is_fullwidth_punctuation)
    }
}

char_mapper_stage!(NarrowPunctuation, "narrow_punctuation");

/// ASCII punctuation → full-width by the fixed offset.
///
/// `"`, `~` and space are not part of the set; they widen through their own
/// stages. `-` always widens to `－`, whichever dash it was narrowed from.
#[derive(Debug, Default, Clone, Copy)]
pub struct WidenPunctuation;

impl CharMapper for WidenPunctuation {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if is_canonical_punctuation(c) {
            shift_to_fullwidth(c)
        } else {
            c
        }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        text.bytes().any(|b| is_canonical_punctuation(b as char))
    }
}

char_mapper_stage!(WidenPunctuation, "widen_punctuation");
