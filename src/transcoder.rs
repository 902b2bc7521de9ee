use crate::{
    process::Pipeline,
    stage::{
        Stage,
        dashes::{NarrowDashes, NarrowTildes, WidenTildes},
        kana::{NarrowKana, WidenKana},
        letters_digits::{NarrowDigits, NarrowLetters, WidenDigits, WidenLetters},
        punctuation::{NarrowPunctuation, WidenPunctuation},
        quotes::{NarrowDoubleQuotes, NarrowSingleQuotes, WidenDoubleQuotes, WidenSingleQuotes},
        space_yen::{NarrowSpace, NarrowYen, WidenSpace, WidenYen},
        voicing_marks::{NarrowVoicingMarks, WidenVoicingMarks},
    },
};
use std::{borrow::Cow, fmt, str::FromStr, sync::LazyLock};
use thiserror::Error;

static NARROWING: LazyLock<Transcoder> = LazyLock::new(Transcoder::narrowing);
static WIDENING: LazyLock<Transcoder> = LazyLock::new(Transcoder::widening);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectionError {
    #[error("unknown conversion direction `{0}` (expected `narrow` or `widen`)")]
    Unknown(String),
}

/// Which way a conversion shifts character width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Full-width (zenkaku) → half-width (hankaku).
    Narrow,
    /// Half-width (hankaku) → full-width (zenkaku).
    Widen,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Narrow => "narrow",
            Direction::Widen => "widen",
        }
    }

    /// Shared preset transcoder for this direction.
    pub fn transcoder(self) -> &'static Transcoder {
        match self {
            Direction::Narrow => &NARROWING,
            Direction::Widen => &WIDENING,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "narrow" => Ok(Direction::Narrow),
            "widen" => Ok(Direction::Widen),
            _ => Err(DirectionError::Unknown(s.to_owned())),
        }
    }
}

/// A named, ordered list of conversion stages.
#[derive(Debug, Clone)]
pub struct Transcoder {
    name: &'static str,
    pipeline: Pipeline,
}

impl Transcoder {
    pub fn builder(name: &'static str) -> TranscoderBuilder {
        TranscoderBuilder::new(name)
    }

    /// Full-width → half-width, in this order: katakana, letters, digits,
    /// double quotes, single quotes, dashes, wave dashes, voicing marks,
    /// space, yen sign, punctuation.
    pub fn narrowing() -> Self {
        let t = Self::builder("narrow")
            .add_stage(NarrowKana)
            .add_stage(NarrowLetters)
            .add_stage(NarrowDigits)
            .add_stage(NarrowDoubleQuotes)
            .add_stage(NarrowSingleQuotes)
            .add_stage(NarrowDashes)
            .add_stage(NarrowTildes)
            .add_stage(NarrowVoicingMarks)
            .add_stage(NarrowSpace)
            .add_stage(NarrowYen)
            .add_stage(NarrowPunctuation)
            .build();
        log::debug!("built `{}` transcoder: {:?}", t.name, t.pipeline);
        t
    }

    /// Half-width → full-width, in this order: katakana, letters, digits,
    /// double quote, single quote, tilde, voicing marks, space, backslash,
    /// punctuation.
    pub fn widening() -> Self {
        let t = Self::builder("widen")
            .add_stage(WidenKana)
            .add_stage(WidenLetters)
            .add_stage(WidenDigits)
            .add_stage(WidenDoubleQuotes)
            .add_stage(WidenSingleQuotes)
            .add_stage(WidenTildes)
            .add_stage(WidenVoicingMarks)
            .add_stage(WidenSpace)
            .add_stage(WidenYen)
            .add_stage(WidenPunctuation)
            .build();
        log::debug!("built `{}` transcoder: {:?}", t.name, t.pipeline);
        t
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Run every stage over `text`. Borrowed input comes back borrowed when
    /// no stage changes anything.
    pub fn transcode<'a>(&self, text: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.pipeline.process(text.into())
    }
}

pub struct TranscoderBuilder {
    name: &'static str,
    pipeline: Pipeline,
}

impl TranscoderBuilder {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            pipeline: Pipeline::new(),
        }
    }

    pub fn add_stage<T: Stage + 'static>(self, stage: T) -> Self {
        Self {
            pipeline: self.pipeline.push(stage),
            ..self
        }
    }

    pub fn build(self) -> Transcoder {
        Transcoder {
            name: self.name,
            pipeline: self.pipeline,
        }
    }
}

/// Full-width → half-width.
pub fn narrow(text: &str) -> String {
    narrow_cow(text).into_owned()
}

/// Half-width → full-width.
pub fn widen(text: &str) -> String {
    widen_cow(text).into_owned()
}

/// Like [`narrow`], but borrows `text` back when nothing narrows.
pub fn narrow_cow(text: &str) -> Cow<'_, str> {
    NARROWING.transcode(text)
}

/// Like [`widen`], but borrows `text` back when nothing widens.
pub fn widen_cow(text: &str) -> Cow<'_, str> {
    WIDENING.transcode(text)
}

pub fn convert(text: &str, direction: Direction) -> String {
    direction.transcoder().transcode(text).into_owned()
}
