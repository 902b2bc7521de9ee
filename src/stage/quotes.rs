//! stage/quotes.rs
//! Quote normalization. Narrowing collapses every curly/prime/full-width
//! quote variant onto one ASCII quote; widening produces a single canonical
//! full-width form, so the original variant is not recoverable.

use crate::{
    stage::{CharMapper, char_mapper_stage},
    unicode::{
        WIDE_DOUBLE_QUOTE, WIDE_SINGLE_QUOTE, is_double_quote_variant, is_single_quote_variant,
    },
};
use memchr::memchr;

/// `” “ ″ 〝 〟 ＂` → `"`
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowDoubleQuotes;

impl CharMapper for NarrowDoubleQuotes {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if is_double_quote_variant(c) { '"' } else { c }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        !text.is_ascii() && text.chars().any(is_double_quote_variant)
    }
}

char_mapper_stage!(NarrowDoubleQuotes, "narrow_double_quotes");

/// `’ ‘ ´ ′ ＇` → `'`
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowSingleQuotes;

impl CharMapper for NarrowSingleQuotes {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if is_single_quote_variant(c) { '\'' } else { c }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        !text.is_ascii() && text.chars().any(is_single_quote_variant)
    }
}

char_mapper_stage!(NarrowSingleQuotes, "narrow_single_quotes");

/// `"` → `”`
#[derive(Debug, Default, Clone, Copy)]
pub struct WidenDoubleQuotes;

impl CharMapper for WidenDoubleQuotes {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if c == '"' { WIDE_DOUBLE_QUOTE } else { c }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        memchr(b'"', text.as_bytes()).is_some()
    }
}

char_mapper_stage!(WidenDoubleQuotes, "widen_double_quotes");

/// `'` → `’`
#[derive(Debug, Default, Clone, Copy)]
pub struct WidenSingleQuotes;

impl CharMapper for WidenSingleQuotes {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if c == '\'' { WIDE_SINGLE_QUOTE } else { c }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        memchr(b'\'', text.as_bytes()).is_some()
    }
}

char_mapper_stage!(WidenSingleQuotes, "widen_single_quotes");
