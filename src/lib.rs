//! Zenkaku ↔ Hankaku conversion for Japanese text.
//!
//! ```
//! assert_eq!(zenhan::narrow("ガラス　ＡＢＣ１２３！"), "ｶﾞﾗｽ ABC123!");
//! assert_eq!(zenhan::widen("ｶﾞﾗｽ ABC123!"), "ガラス　ＡＢＣ１２３！");
//! ```

pub mod process;
pub mod stage;
pub mod table;
pub mod transcoder;
pub mod unicode;

pub use stage::{CharMapper, Stage};
pub use table::TableError;
pub use transcoder::{
    Direction, DirectionError, Transcoder, TranscoderBuilder, convert, narrow, narrow_cow, widen,
    widen_cow,
};
