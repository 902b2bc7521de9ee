//! Katakana glyph table.
//!
//! `HALFWIDTH_KANA` is the single source of truth: every full-width katakana
//! (and katakana punctuation) that has a half-width form, keyed by the
//! full-width codepoint. Voiced and semi-voiced kana map to a two-character
//! digraph: the half-width base followed by `ﾞ` (U+FF9E) or `ﾟ` (U+FF9F).
//!
//! The reverse direction is derived from it once, on first use.

use phf::{Map, phf_map};
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

use crate::unicode::{HALFWIDTH_SEMI_VOICED_MARK, HALFWIDTH_VOICED_MARK};

/// Full-width katakana → half-width form.
pub static HALFWIDTH_KANA: Map<char, &'static str> = phf_map! {
    // dakuten
    'ガ' => "ｶﾞ", 'ギ' => "ｷﾞ", 'グ' => "ｸﾞ", 'ゲ' => "ｹﾞ", 'ゴ' => "ｺﾞ",
    'ザ' => "ｻﾞ", 'ジ' => "ｼﾞ", 'ズ' => "ｽﾞ", 'ゼ' => "ｾﾞ", 'ゾ' => "ｿﾞ",
    'ダ' => "ﾀﾞ", 'ヂ' => "ﾁﾞ", 'ヅ' => "ﾂﾞ", 'デ' => "ﾃﾞ", 'ド' => "ﾄﾞ",
    'バ' => "ﾊﾞ", 'ビ' => "ﾋﾞ", 'ブ' => "ﾌﾞ", 'ベ' => "ﾍﾞ", 'ボ' => "ﾎﾞ",
    'ヴ' => "ｳﾞ", 'ヷ' => "ﾜﾞ", 'ヺ' => "ｦﾞ",
    // handakuten
    'パ' => "ﾊﾟ", 'ピ' => "ﾋﾟ", 'プ' => "ﾌﾟ", 'ペ' => "ﾍﾟ", 'ポ' => "ﾎﾟ",
    // syllabary
    'ア' => "ｱ", 'イ' => "ｲ", 'ウ' => "ｳ", 'エ' => "ｴ", 'オ' => "ｵ",
    'カ' => "ｶ", 'キ' => "ｷ", 'ク' => "ｸ", 'ケ' => "ｹ", 'コ' => "ｺ",
    'サ' => "ｻ", 'シ' => "ｼ", 'ス' => "ｽ", 'セ' => "ｾ", 'ソ' => "ｿ",
    'タ' => "ﾀ", 'チ' => "ﾁ", 'ツ' => "ﾂ", 'テ' => "ﾃ", 'ト' => "ﾄ",
    'ナ' => "ﾅ", 'ニ' => "ﾆ", 'ヌ' => "ﾇ", 'ネ' => "ﾈ", 'ノ' => "ﾉ",
    'ハ' => "ﾊ", 'ヒ' => "ﾋ", 'フ' => "ﾌ", 'ヘ' => "ﾍ", 'ホ' => "ﾎ",
    'マ' => "ﾏ", 'ミ' => "ﾐ", 'ム' => "ﾑ", 'メ' => "ﾒ", 'モ' => "ﾓ",
    'ヤ' => "ﾔ", 'ユ' => "ﾕ", 'ヨ' => "ﾖ",
    'ラ' => "ﾗ", 'リ' => "ﾘ", 'ル' => "ﾙ", 'レ' => "ﾚ", 'ロ' => "ﾛ",
    'ワ' => "ﾜ", 'ヲ' => "ｦ", 'ン' => "ﾝ",
    // small kana
    'ァ' => "ｧ", 'ィ' => "ｨ", 'ゥ' => "ｩ", 'ェ' => "ｪ", 'ォ' => "ｫ",
    'ッ' => "ｯ", 'ャ' => "ｬ", 'ュ' => "ｭ", 'ョ' => "ｮ",
    // punctuation
    '。' => "｡", '、' => "､", 'ー' => "ｰ", '「' => "｢", '」' => "｣", '・' => "･",
};

/// Half-width form → full-width katakana, derived from [`HALFWIDTH_KANA`].
pub static FULLWIDTH_KANA: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    let inverse = invert(HALFWIDTH_KANA.entries().map(|(&k, &v)| (k, v)));
    log::debug!("built inverse kana table with {} entries", inverse.len());
    inverse
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("half-width form `{value}` is claimed by both `{first}` and `{second}`")]
    DuplicateHalfwidth {
        value: &'static str,
        first: char,
        second: char,
    },
}

/// Swap keys and values. A repeated value keeps the last key seen.
pub fn invert<I>(pairs: I) -> HashMap<&'static str, char>
where
    I: IntoIterator<Item = (char, &'static str)>,
{
    let mut out = HashMap::new();
    for (full, half) in pairs {
        out.insert(half, full);
    }
    out
}

/// Like [`invert`], but a repeated value is an error instead of an override.
pub fn try_invert<I>(pairs: I) -> Result<HashMap<&'static str, char>, TableError>
where
    I: IntoIterator<Item = (char, &'static str)>,
{
    let mut out = HashMap::new();
    for (full, half) in pairs {
        if let Some(first) = out.insert(half, full) {
            return Err(TableError::DuplicateHalfwidth {
                value: half,
                first,
                second: full,
            });
        }
    }
    Ok(out)
}

#[inline]
pub fn narrow_kana(c: char) -> Option<&'static str> {
    HALFWIDTH_KANA.get(&c).copied()
}

#[inline]
pub fn widen_kana(token: &str) -> Option<char> {
    FULLWIDTH_KANA.get(token).copied()
}

#[inline(always)]
fn is_voicing_mark(c: char) -> bool {
    c == HALFWIDTH_VOICED_MARK || c == HALFWIDTH_SEMI_VOICED_MARK
}

/// Longest inverse-table token at the head of `text`.
///
/// Returns the full-width character and the number of bytes consumed. A base
/// kana followed by a voicing mark is tried as one token before the base alone.
pub fn match_halfwidth(text: &str) -> Option<(char, usize)> {
    let mut chars = text.chars();
    let base = chars.next()?;
    let base_len = base.len_utf8();

    if let Some(mark) = chars.next().filter(|&m| is_voicing_mark(m)) {
        let pair_len = base_len + mark.len_utf8();
        if let Some(full) = widen_kana(&text[..pair_len]) {
            return Some((full, pair_len));
        }
    }

    widen_kana(&text[..base_len]).map(|full| (full, base_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_expected_groups() {
        // 23 dakuten + 5 handakuten + 46 syllabary + 9 small + 6 punctuation
        assert_eq!(HALFWIDTH_KANA.len(), 89);
        for c in "アカサタナハマヤラワヲンガザダバパヴァッャ。、・ー「」".chars() {
            assert!(HALFWIDTH_KANA.contains_key(&c), "missing {c}");
        }
    }

    #[test]
    fn builtin_table_has_no_duplicate_values() {
        let strict = try_invert(HALFWIDTH_KANA.entries().map(|(&k, &v)| (k, v))).unwrap();
        assert_eq!(strict.len(), HALFWIDTH_KANA.len());
        assert_eq!(FULLWIDTH_KANA.len(), HALFWIDTH_KANA.len());
    }

    #[test]
    fn inverse_is_lossless_on_the_table() {
        for (&full, &half) in HALFWIDTH_KANA.entries() {
            assert_eq!(widen_kana(half), Some(full), "{full} -> {half}");
        }
    }

    #[test]
    fn halfwidth_values_are_one_or_two_chars() {
        for (&full, &half) in HALFWIDTH_KANA.entries() {
            let n = half.chars().count();
            assert!(n == 1 || n == 2, "{full} -> {half}");
            if n == 2 {
                assert!(half.chars().nth(1).is_some_and(is_voicing_mark));
            }
        }
    }

    #[test]
    fn invert_keeps_last_duplicate() {
        let inv = invert([('ア', "x"), ('イ', "x"), ('ウ', "y")]);
        assert_eq!(inv.get("x"), Some(&'イ'));
        assert_eq!(inv.get("y"), Some(&'ウ'));
    }

    #[test]
    fn try_invert_reports_duplicate() {
        let err = try_invert([('ア', "x"), ('イ', "x")]).unwrap_err();
        assert_eq!(
            err,
            TableError::DuplicateHalfwidth {
                value: "x",
                first: 'ア',
                second: 'イ',
            }
        );
        assert_eq!(
            err.to_string(),
            "half-width form `x` is claimed by both `ア` and `イ`"
        );
    }

    #[test]
    fn match_prefers_digraph() {
        assert_eq!(match_halfwidth("ｶﾞﾗｽ"), Some(('ガ', 6)));
        assert_eq!(match_halfwidth("ﾊﾟﾝ"), Some(('パ', 6)));
        assert_eq!(match_halfwidth("ｶﾗｽ"), Some(('カ', 3)));
    }

    #[test]
    fn match_falls_back_to_base_for_unknown_pair() {
        // ｱ has no voiced form: the mark is left for a later stage
        assert_eq!(match_halfwidth("ｱﾞ"), Some(('ア', 3)));
        assert_eq!(match_halfwidth("ｶﾟ"), Some(('カ', 3)));
    }

    #[test]
    fn match_rejects_non_table_heads() {
        assert_eq!(match_halfwidth(""), None);
        assert_eq!(match_halfwidth("abc"), None);
        assert_eq!(match_halfwidth("ﾞ"), None);
        assert_eq!(match_halfwidth("カ"), None);
    }
}
