//! stage/dashes.rs
//! Dash and wave-dash normalization.
//!
//! There is no `WidenDashes`: `-` is part of the canonical punctuation set
//! and widens to `－` through [`WidenPunctuation`](super::punctuation::WidenPunctuation).

use crate::{
    stage::{CharMapper, char_mapper_stage},
    unicode::{WIDE_TILDE, is_dash_variant, is_wave_dash_variant},
};
use memchr::memchr;

/// `‐ － ―` → `-`
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowDashes;

impl CharMapper for NarrowDashes {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if is_dash_variant(c) { '-' } else { c }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        !text.is_ascii() && text.chars().any(is_dash_variant)
    }
}

char_mapper_stage!(NarrowDashes, "narrow_dashes");

/// `～ 〜` → `~`
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowTildes;

impl CharMapper for NarrowTildes {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if is_wave_dash_variant(c) { '~' } else { c }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        !text.is_ascii() && text.chars().any(is_wave_dash_variant)
    }
}

char_mapper_stage!(NarrowTildes, "narrow_tildes");

/// `~` → `～`
#[derive(Debug, Default, Clone, Copy)]
pub struct WidenTildes;

impl CharMapper for WidenTildes {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        if c == '~' { WIDE_TILDE } else { c }
    }

    #[inline]
    fn touches(&self, text: &str) -> bool {
        memchr(b'~', text.as_bytes()).is_some()
    }
}

char_mapper_stage!(WidenTildes, "widen_tildes");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;
    use crate::stage::Stage;
    use crate::testing::stage_contract::StageTestConfig;
    use std::borrow::Cow;

    impl StageTestConfig for NarrowDashes {
        fn should_pass_through() -> &'static [&'static str] {
            // em/en dashes and the long-vowel mark are not dash variants here
            &["test-123", "—–", "ー", ""]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[("０‐１", "０-１"), ("a－b", "a-b"), ("――", "--")]
        }
    }

    impl StageTestConfig for NarrowTildes {
        fn should_pass_through() -> &'static [&'static str] {
            &["~", "ー", ""]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[("10～20", "10~20"), ("〜", "~")]
        }
    }

    impl StageTestConfig for WidenTildes {
        fn should_pass_through() -> &'static [&'static str] {
            &["～", "hello", ""]
        }

        fn should_transform() -> &'static [(&'static str, &'static str)] {
            &[("10~20", "10～20")]
        }
    }

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(NarrowDashes);
        assert_stage_contract!(NarrowTildes);
        assert_stage_contract!(WidenTildes);
    }

    #[test]
    fn wave_dash_round_trip_is_lossy() {
        let narrowed = NarrowTildes.apply(Cow::Borrowed("〜"));
        assert_eq!(narrowed, "~");
        let widened = WidenTildes.apply(narrowed);
        assert_eq!(widened, "～");
    }
}
