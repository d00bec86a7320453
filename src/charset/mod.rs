//! # Character Sets
//!
//! Everything needed to decide how one Unicode character reaches paper.
//!
//! ## Modules
//!
//! - [`jis`]: JIS X 0201/0208/0212/0213 membership tables
//! - [`emoji`]: Emoji code point ranges
//! - [`sjis`]: Shift_JIS encoding for characters the printer already has
//! - [`classify`]: The per-character decision between built-in and gaiji
//!
//! The classifier talks to the tables through [`CharsetOracle`] and
//! [`EmojiOracle`] so tests (and other devices) can substitute their own.

pub mod classify;
pub mod emoji;
pub mod jis;
pub mod sjis;

pub use classify::{Classification, Classifier, FontTier};
pub use emoji::UnicodeEmoji;
pub use jis::{JisSet, JisTables, Mapping};

/// Membership test for the legacy Japanese character sets.
pub trait CharsetOracle {
    fn contains(&self, set: JisSet, ch: char) -> bool;

    /// Device bytes for a resident character, if the tables record them.
    fn shift_jis(&self, _ch: char) -> Option<Vec<u8>> {
        None
    }
}

/// Emoji classification for a single code point.
pub trait EmojiOracle {
    fn is_emoji(&self, ch: char) -> bool;
}
