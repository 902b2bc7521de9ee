// Character classes and width-shift primitives shared by the stages.

/// Distance between an ASCII character and its full-width form (U+FF01..U+FF5E).
pub const FULLWIDTH_OFFSET: u32 = 0xFEE0;

pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';
pub const FULLWIDTH_YEN: char = '\u{FFE5}';

pub const VOICED_MARK: char = '\u{309B}'; // ゛
pub const SEMI_VOICED_MARK: char = '\u{309C}'; // ゜
pub const HALFWIDTH_VOICED_MARK: char = '\u{FF9E}'; // ﾞ
pub const HALFWIDTH_SEMI_VOICED_MARK: char = '\u{FF9F}'; // ﾟ

/// Canonical full-width forms produced when widening `"`, `'` and `~`.
pub const WIDE_DOUBLE_QUOTE: char = '\u{201D}'; // ”
pub const WIDE_SINGLE_QUOTE: char = '\u{2019}'; // ’
pub const WIDE_TILDE: char = '\u{FF5E}'; // ～

/// `！`..=`～` → `!`..=`~`; anything else is returned unchanged.
#[inline(always)]
pub fn shift_to_ascii(c: char) -> char {
    if ('\u{FF01}'..='\u{FF5E}').contains(&c) {
        char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// `!`..=`~` → `！`..=`～`; anything else is returned unchanged.
#[inline(always)]
pub fn shift_to_fullwidth(c: char) -> char {
    if ('!'..='~').contains(&c) {
        char::from_u32(c as u32 + FULLWIDTH_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

// Ａ-Ｚ ａ-ｚ
#[inline(always)]
pub fn is_fullwidth_letter(c: char) -> bool {
    matches!(c, '\u{FF21}'..='\u{FF3A}' | '\u{FF41}'..='\u{FF5A}')
}

// ０-９
#[inline(always)]
pub fn is_fullwidth_digit(c: char) -> bool {
    matches!(c, '\u{FF10}'..='\u{FF19}')
}

/// ASCII punctuation that is width-shifted by the fixed offset.
///
/// `"`, `~` and space are absent: they have dedicated stages with their own
/// canonical forms.
#[inline(always)]
pub fn is_canonical_punctuation(c: char) -> bool {
    matches!(
        c,
        '!' | '#'
            | '$'
            | '%'
            | '&'
            | '\''
            | '('
            | ')'
            | '*'
            | '+'
            | ','
            | '-'
            | '.'
            | '/'
            | ':'
            | ';'
            | '<'
            | '='
            | '>'
            | '?'
            | '@'
            | '['
            | '\\'
            | ']'
            | '^'
            | '_'
            | '`'
            | '{'
            | '|'
            | '}'
    )
}

/// Full-width punctuation narrowed by the fixed offset: ！＂＃＄％＆＇（）＊＋，－．／：；＜＝＞？＠［＼］＾＿｀｛｜｝
#[inline(always)]
pub fn is_fullwidth_punctuation(c: char) -> bool {
    matches!(
        c,
        '\u{FF01}'..='\u{FF0F}'
            | '\u{FF1A}'..='\u{FF20}'
            | '\u{FF3B}'..='\u{FF40}'
            | '\u{FF5B}'..='\u{FF5D}'
    )
}

// ” “ ″ 〝 〟 ＂
#[inline(always)]
pub fn is_double_quote_variant(c: char) -> bool {
    matches!(
        c,
        '\u{201D}' | '\u{201C}' | '\u{2033}' | '\u{301D}' | '\u{301F}' | '\u{FF02}'
    )
}

// ’ ‘ ´ ′ ＇
#[inline(always)]
pub fn is_single_quote_variant(c: char) -> bool {
    matches!(
        c,
        '\u{2019}' | '\u{2018}' | '\u{00B4}' | '\u{2032}' | '\u{FF07}'
    )
}

// ‐ － ―
#[inline(always)]
pub fn is_dash_variant(c: char) -> bool {
    matches!(c, '\u{2010}' | '\u{FF0D}' | '\u{2015}')
}

// ～ 〜
#[inline(always)]
pub fn is_wave_dash_variant(c: char) -> bool {
    matches!(c, '\u{FF5E}' | '\u{301C}')
}
