#[cfg(test)]
mod unit_tests {

    use crate::{narrow, narrow_cow, widen, widen_cow};
    use std::borrow::Cow;

    #[test]
    fn katakana_digraphs() {
        assert_eq!(narrow("ガラス"), "ｶﾞﾗｽ");
        assert_eq!(widen("ｶﾞﾗｽ"), "ガラス");
    }

    #[test]
    fn ascii_letters_and_digits() {
        assert_eq!(narrow("ＡＢＣ１２３"), "ABC123");
        assert_eq!(widen("ABC123"), "ＡＢＣ１２３");
    }

    #[test]
    fn punctuation_width_shift() {
        assert_eq!(narrow("！＄？"), "!$?");
        assert_eq!(widen("!$?"), "！＄？");
    }

    #[test]
    fn space_handling() {
        assert_eq!(narrow("ＡＢＣ　１２３"), "ABC 123");
        assert_eq!(widen("テスト テスト"), "テスト　テスト");
    }

    #[test]
    fn halfwidth_kana_untouched_by_narrowing() {
        assert_eq!(narrow("ﾃｽﾄ　ﾃｽﾄ"), "ﾃｽﾄ ﾃｽﾄ");
    }

    #[test]
    fn plain_katakana_widening() {
        assert_eq!(widen("ｶﾀｶﾅ"), "カタカナ");
    }

    #[test]
    fn dakuten_recombination() {
        assert_eq!(widen("ｳﾞｧ"), "ヴァ");
    }

    #[test]
    fn lossy_quote_dash_tilde_normalization() {
        assert_eq!(narrow("”“″〝〟＂"), "\"\"\"\"\"\"");
        assert_eq!(narrow("’‘´′＇"), "'''''");
        assert_eq!(narrow("‐－―"), "---");
        assert_eq!(narrow("～〜"), "~~");
        // Widening picks one canonical form per ASCII char
        assert_eq!(widen("\"'~-"), "”’～－");
    }

    #[test]
    fn yen_and_backslash() {
        assert_eq!(narrow("￥１００"), "\\100");
        assert_eq!(widen("\\100"), "￥１００");
        // ＼ narrows through the punctuation offset
        assert_eq!(narrow("＼"), "\\");
    }

    #[test]
    fn standalone_voicing_marks() {
        assert_eq!(narrow("゛゜"), "ﾞﾟ");
        assert_eq!(widen("ﾞﾟ"), "゛゜");
        // a mark that cannot combine stays a separate mark
        assert_eq!(widen("ｱﾞ"), "ア゛");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(narrow("漢字ひらがな🍣"), "漢字ひらがな🍣");
        assert_eq!(widen("漢字ひらがな🍣"), "漢字ひらがな🍣");
        assert_eq!(narrow("\t\n"), "\t\n");
        assert_eq!(widen("\t\n"), "\t\n");
    }

    #[test]
    fn empty_input() {
        assert_eq!(narrow(""), "");
        assert_eq!(widen(""), "");
    }

    #[test]
    fn zero_copy_when_already_narrow() {
        let input = "hello ｶﾞﾗｽ 123!";
        let result = narrow_cow(input);
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn zero_copy_when_already_wide() {
        let input = "ガラス　ＡＢＣ１２３！";
        let result = widen_cow(input);
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn narrowing_allocates_when_needed() {
        let result = narrow_cow("ガ");
        assert!(matches!(result, Cow::Owned(_)));
        assert_eq!(result.chars().count(), 2);
    }
}
