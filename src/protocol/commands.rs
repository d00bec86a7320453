//! # ESC/POS Session Commands
//!
//! Control-byte constants and the commands that put a Japanese-model
//! ESC/POS printer into the state the rest of this crate assumes.
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Two bytes: `FS &`
//! - Multi-byte with parameters: `ESC t n`, `FS C n`, `GS V m n`
//!
//! ## Session State
//!
//! Every print call assumes the device is in kanji mode with the Shift_JIS
//! code system selected. In that mode the printer consumes any lead byte in
//! the Shift_JIS lead ranges together with the following byte as one
//! double-byte character, which is what makes inline gaiji selection
//! (`EC 40`, `EC 41`, ...) possible.

// ============================================================================
// CONTROL BYTE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte (0x1B)
pub const ESC: u8 = 0x1B;

/// FS (File Separator) - Kanji command prefix (0x1C)
///
/// Japanese ESC/POS models route all kanji-mode commands through FS:
/// kanji mode on/off, kanji code system, gaiji definition, kanji print mode.
pub const FS: u8 = 0x1C;

/// GS (Group Separator) - Extended command prefix (0x1D)
pub const GS: u8 = 0x1D;

// ============================================================================
// CHARACTER SET SELECTION
// ============================================================================

/// Character code tables selectable with `ESC t`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeTable {
    /// Page 0: PC437 (USA, Standard Europe)
    Pc437 = 0,
    /// Page 1: Katakana (half-width kana in 0xA1..=0xDF)
    #[default]
    Katakana = 1,
}

/// # Select Character Code Table (ESC t n)
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | ESC t n  |
/// | Hex     | 1B 74 n  |
///
/// ## Example
///
/// ```
/// use gaiji::protocol::commands::{code_table, CodeTable};
///
/// assert_eq!(code_table(CodeTable::Katakana), vec![0x1B, 0x74, 0x01]);
/// ```
#[inline]
pub fn code_table(table: CodeTable) -> Vec<u8> {
    vec![ESC, b't', table as u8]
}

/// # Kanji Mode On (FS &)
///
/// After this command, byte pairs in the selected kanji code system are
/// printed as double-byte characters.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | FS &  |
/// | Hex     | 1C 26 |
#[inline]
pub fn kanji_mode_on() -> Vec<u8> {
    vec![FS, b'&']
}

/// Kanji code systems selectable with `FS C`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KanjiCode {
    Jis = 0,
    #[default]
    ShiftJis = 1,
}

/// # Select Kanji Code System (FS C n)
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | FS C n  |
/// | Hex     | 1C 43 n |
#[inline]
pub fn kanji_code(code: KanjiCode) -> Vec<u8> {
    vec![FS, b'C', code as u8]
}

/// Commands sent once when a session opens.
///
/// Katakana code page, kanji mode on, Shift_JIS code system.
///
/// ## Example
///
/// ```
/// use gaiji::protocol::commands;
///
/// assert_eq!(
///     commands::session_init(),
///     vec![0x1B, 0x74, 0x01, 0x1C, 0x26, 0x1C, 0x43, 0x01]
/// );
/// ```
pub fn session_init() -> Vec<u8> {
    let mut cmds = Vec::with_capacity(8);
    cmds.extend(code_table(CodeTable::Katakana));
    cmds.extend(kanji_mode_on());
    cmds.extend(kanji_code(KanjiCode::ShiftJis));
    cmds
}

// ============================================================================
// CUTTER CONTROL
// ============================================================================

/// # Feed and Full Cut (GS V 65 n)
///
/// Feeds the paper to the cutting position plus `n` dots, then cuts.
///
/// | Format  | Bytes       |
/// |---------|-------------|
/// | ASCII   | GS V A n    |
/// | Hex     | 1D 56 41 n  |
#[inline]
pub fn cut_feed(n: u8) -> Vec<u8> {
    vec![GS, b'V', 65, n]
}

/// Feed to the cutter and cut with no extra margin
#[inline]
pub fn cut() -> Vec<u8> {
    cut_feed(0)
}

// ============================================================================
// TESTS
// ============================================================================
