//! Conversion stage abstraction.
//!
//! Each substitution step of a conversion is a [`Stage`]. Stages are tiny,
//! stateless values that run in a fixed order inside a
//! [`Pipeline`](crate::process::Pipeline).
//!
//! Two entry points matter for performance:
//!
//! * `needs_apply(&self, &str)` – exact pre-check. When it returns `false`
//!   the pipeline skips the stage and a borrowed input stays borrowed.
//! * `as_char_mapper(&self) -> Option<&dyn CharMapper>` – returned by
//!   stages that are a pure 1-to-1 character mapping. The pipeline composes
//!   runs of such stages into a single pass over the text.
//!
//! Kana stages change the character count (a voiced kana is one full-width
//! char but two half-width chars), so they return `None` and always go
//! through `apply`.

pub mod dashes;
pub mod kana;
pub mod letters_digits;
pub mod punctuation;
pub mod quotes;
pub mod space_yen;
pub mod voicing_marks;

use std::borrow::Cow;

/// A single conversion step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in logs.
    fn name(&self) -> &'static str;

    /// Returns `true` iff `apply` would change `text`.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called on text that `needs_apply` would have skipped.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;

    /// Trait-object view of `self` for stages that map one char to one char.
    #[inline]
    fn as_char_mapper(&self) -> Option<&dyn CharMapper> {
        None
    }
}

/// Pure 1-to-1 character mapping.
pub trait CharMapper: Send + Sync {
    /// Map a single char; untouched chars map to themselves.
    fn map(&self, c: char) -> char;

    /// Does any char of `text` change under [`map`](Self::map)?
    #[inline]
    fn touches(&self, text: &str) -> bool {
        text.chars().any(|c| self.map(c) != c)
    }
}

/// Apply `mapper` to every char, borrowing `text` back when nothing changes.
pub(crate) fn map_chars<'a, M: CharMapper + ?Sized>(mapper: &M, text: Cow<'a, str>) -> Cow<'a, str> {
    let Some(first) = text.char_indices().find(|&(_, c)| mapper.map(c) != c) else {
        return text;
    };
    let (head, tail) = text.split_at(first.0);
    let mut out = String::with_capacity(text.len() + 3);
    out.push_str(head);
    out.extend(tail.chars().map(|c| mapper.map(c)));
    Cow::Owned(out)
}

/// Implements [`Stage`] for a type that already implements [`CharMapper`].
macro_rules! char_mapper_stage {
    ($ty:ty, $name:literal) => {
        impl $crate::stage::Stage for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            #[inline(always)]
            fn needs_apply(&self, text: &str) -> bool {
                $crate::stage::CharMapper::touches(self, text)
            }

            fn apply<'a>(&self, text: ::std::borrow::Cow<'a, str>) -> ::std::borrow::Cow<'a, str> {
                $crate::stage::map_chars(self, text)
            }

            #[inline]
            fn as_char_mapper(&self) -> Option<&dyn $crate::stage::CharMapper> {
                Some(self)
            }
        }
    };
}
pub(crate) use char_mapper_stage;

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;
    impl CharMapper for Upper {
        fn map(&self, c: char) -> char {
            c.to_ascii_uppercase()
        }
    }

    #[test]
    fn map_chars_borrows_when_unchanged() {
        let input = "ABC 123";
        let out = map_chars(&Upper, Cow::Borrowed(input));
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn map_chars_rewrites_from_first_change() {
        let out = map_chars(&Upper, Cow::Borrowed("ABc d"));
        assert!(matches!(out, Cow::Owned(_)));
        assert_eq!(out, "ABC D");
    }

    #[test]
    fn default_touches_uses_map() {
        assert!(Upper.touches("aB"));
        assert!(!Upper.touches("AB ア"));
        assert!(!Upper.touches(""));
    }
}
