//! stage/space_yen.rs
//! Ideographic space ↔ ASCII space, and `￥` ↔ `\`.

use crate::{
    stage::{CharMapper, char_mapper_stage},
    unicode::{FULLWIDTH_YEN, IDEOGRAPHIC_SPACE},
};
use memchr::memchr;

/// U+3000 → U+0020
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowSpace;

impl CharMapper for NarrowSpace {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if c == IDEOGRAPHIC_SPACE { ' ' } else { c }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        // U+3000 encodes as E3 80 80
        memchr::memmem::find(text.as_bytes(), "\u{3000}".as_bytes()).is_some()
    }
}

char_mapper_stage!(NarrowSpace, "narrow_space");

/// U+0020 → U+3000. Other ASCII whitespace is left alone.
#[derive(Debug, Default, Clone, Copy)]
pub struct WidenSpace;

impl CharMapper for WidenSpace {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if c == ' ' { IDEOGRAPHIC_SPACE } else { c }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        memchr(b' ', text.as_bytes()).is_some()
    }
}

char_mapper_stage!(WidenSpace, "widen_space");

/// `￥` → `\`
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowYen;

impl CharMapper for NarrowYen {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if c == FULLWIDTH_YEN { '\\' } else { c }
    }
}

char_mapper_stage!(NarrowYen, "narrow_yen");

/// `\` → `￥`
#[derive(Debug, Default, Clone, Copy)]
pub struct WidenYen;

impl CharMapper for WidenYen {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if c == '\\' { FULLWIDTH_YEN } else { c }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        memchr(b'\\', text.as_bytes()).is_some()
    }
}

char_mapper_stage!(WidenYen, "widen_yen");
