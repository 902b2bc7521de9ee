//! stage/voicing_marks.rs
//! Standalone (spacing) voicing marks: `゛゜` ↔ `ﾞﾟ`.
//! Runs after the kana stages, so only marks not absorbed into a digraph remain.

use crate::{
    stage::{CharMapper, char_mapper_stage},
    unicode::{HALFWIDTH_SEMI_VOICED_MARK, HALFWIDTH_VOICED_MARK, SEMI_VOICED_MARK, VOICED_MARK},
};

/// `゛゜` → `ﾞﾟ`
#[derive(Debug, Default, Clone, Copy)]
pub struct NarrowVoicingMarks;

impl CharMapper for NarrowVoicingMarks {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        match c {
            VOICED_MARK => HALFWIDTH_VOICED_MARK,
            SEMI_VOICED_MARK => HALFWIDTH_SEMI_VOICED_MARK,
            _ => c,
        }
    }
}

char_mapper_stage!(NarrowVoicingMarks, "narrow_voicing_marks");

/// `ﾞﾟ` → `゛゜`
#[derive(Debug, Default, Clone, Copy)]
pub struct WidenVoicingMarks;

impl CharMapper for WidenVoicingMarks {
    #[inline(always)]
    fn map(&self, c: char) -> char {
        match c {
            HALFWIDTH_VOICED_MARK => VOICED_MARK,
            HALFWIDTH_SEMI_VOICED_MARK => SEMI_VOICED_MARK,
            _ => c,
        }
    }
}

char_mapper_stage!(WidenVoicingMarks, "widen_voicing_marks");
