//! stage/kana.rs
//! Katakana ↔ half-width katakana through the glyph table.
//! Not a 1→1 char mapping: voiced kana expand to (or collapse from) a
//! base + mark digraph, so these stages never fuse.

use crate::{
    stage::Stage,
    table::{match_halfwidth, narrow_kana},
};
use std::borrow::Cow;

/// Full-width katakana → half-width katakana.
///
/// `ガ` becomes the two chars `ｶﾞ`; katakana punctuation (`。「」、・ー`)
/// narrows as well. Hiragana and kanji pass through.
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowKana;

impl Stage for NarrowKana {
    fn name(&self) -> &'static str {
        "narrow_kana"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_ascii() && text.chars().any(|c| narrow_kana(c).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let Some((start, _)) = text.char_indices().find(|&(_, c)| narrow_kana(c).is_some()) else {
            return text;
        };
        // Half-width kana are 3 bytes like their full-width source; only
        // digraphs grow, by one mark each.
        let mut out = String::with_capacity(text.len() + text.len() / 3);
        out.push_str(&text[..start]);
        for c in text[start..].chars() {
            match narrow_kana(c) {
                Some(half) => out.push_str(half),
                None => out.push(c),
            }
        }
        Cow::Owned(out)
    }
}

/// Half-width katakana → full-width katakana.
///
/// A base followed by `ﾞ`/`ﾟ` is matched as one token first, so `ｶﾞ` becomes
/// `ガ` rather than `カ` plus a stray mark. Marks that do not combine with the
/// preceding char are left for [`WidenVoicingMarks`](super::voicing_marks::WidenVoicingMarks).
#[derive(Debug, Default, Clone, Copy)]
pub struct WidenKana;

impl Stage for WidenKana {
    fn name(&self) -> &'static str {
        "widen_kana"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        !text.is_ascii()
            && text
                .char_indices()
                .any(|(i, _)| match_halfwidth(&text[i..]).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        let Some(start) = text
            .char_indices()
            .map(|(i, _)| i)
            .find(|&i| match_halfwidth(&text[i..]).is_some())
        else {
            return text;
        };
        let mut out = String::with_capacity(text.len());
        out.push_str(&text[..start]);

        let mut rest = &text[start..];
        while let Some(c) = rest.chars().next() {
            match match_halfwidth(rest) {
                Some((full, consumed)) => {
                    out.push(full);
                    rest = &rest[consumed..];
                }
                None => {
                    out.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
        Cow::Owned(out)
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for NarrowKana {
    fn should_pass_through() -> &'static [&'static str] {
        &["ｶﾞﾗｽ", "ひらがな", "ABC 123", "ﾃｽﾄ ﾃｽﾄ", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("ガラス", "ｶﾞﾗｽ"),
            ("パン", "ﾊﾟﾝ"),
            ("ヴァイオリン", "ｳﾞｧｲｵﾘﾝ"),
            ("「テスト」。", "｢ﾃｽﾄ｣｡"),
            ("コーヒー、ティー・ミルク", "ｺｰﾋｰ､ﾃｨｰ･ﾐﾙｸ"),
            ("ヷヺ", "ﾜﾞｦﾞ"),
            ("漢字カナ", "漢字ｶﾅ"),
        ]
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for WidenKana {
    fn should_pass_through() -> &'static [&'static str] {
        &["ガラス", "ひらがな", "ABC 123", "ﾞﾟ", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("ｶﾞﾗｽ", "ガラス"),
            ("ｶﾀｶﾅ", "カタカナ"),
            ("ｳﾞｧ", "ヴァ"),
            ("ﾊﾟﾋﾟﾌﾟﾍﾟﾎﾟ", "パピプペポ"),
            ("｢ﾃｽﾄ｣｡", "「テスト」。"),
            ("ｱﾞ", "アﾞ"),
            ("ﾜﾞｦﾞ", "ヷヺ"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;
    use crate::table::HALFWIDTH_KANA;

    #[test]
    fn narrow_contract_compliance() {
        assert_stage_contract!(NarrowKana);
    }

    #[test]
    fn widen_contract_compliance() {
        assert_stage_contract!(WidenKana);
    }

    #[test]
    fn narrow_keeps_prefix_and_suffix() {
        let out = NarrowKana.apply(Cow::Borrowed("abc ガ xyz"));
        assert_eq!(out, "abc ｶﾞ xyz");
    }

    #[test]
    fn widen_does_not_split_digraph() {
        let out = WidenKana.apply(Cow::Borrowed("ﾊﾞｽ"));
        assert_eq!(out, "バス");
        assert_eq!(out.chars().count(), 2);
    }

    #[test]
    fn widen_leaves_orphan_marks() {
        assert_eq!(WidenKana.apply(Cow::Borrowed("ﾞｱﾟ")), "ﾞアﾟ");
        assert!(!WidenKana.needs_apply("ﾞﾟ"));
    }

    #[test]
    fn every_table_entry_round_trips() {
        for (&full, &half) in HALFWIDTH_KANA.entries() {
            let s = full.to_string();
            let narrowed = NarrowKana.apply(Cow::Borrowed(s.as_str()));
            assert_eq!(narrowed, half);
            let widened = WidenKana.apply(narrowed);
            assert_eq!(widened, s);
        }
    }
}
