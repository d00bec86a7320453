//! # Print-Mode Attribute Commands
//!
//! Japanese ESC/POS printers keep separate print-mode registers for
//! single-byte (ANK) and double-byte (kanji, gaiji) characters:
//!
//! | Register | Command | Double width | Double height | Underline |
//! |----------|---------|--------------|---------------|-----------|
//! | Kanji | FS ! n | 0x04 | 0x08 | 0x80 |
//! | Single-byte | ESC ! n | 0x10 | 0x20 | 0x80 |
//!
//! Reverse (white on black) is a third, independent switch: `GS B n`.
//!
//! Attributes are applied as a bracket: [`PrintAttributes::set_commands`]
//! before the text and [`PrintAttributes::clear_commands`] after it, so the
//! device registers are back at their defaults when the call returns.

use super::commands::{ESC, FS, GS};

// ============================================================================
// PRINT MODE BITS
// ============================================================================

/// `FS !` bit: double width
pub const KANJI_DOUBLE_WIDTH: u8 = 0x04;
/// `FS !` bit: double height
pub const KANJI_DOUBLE_HEIGHT: u8 = 0x08;
/// `FS !` bit: underline (1 dot)
pub const KANJI_UNDERLINE: u8 = 0x80;

/// `ESC !` bit: double width
pub const ANK_DOUBLE_WIDTH: u8 = 0x10;
/// `ESC !` bit: double height
pub const ANK_DOUBLE_HEIGHT: u8 = 0x20;
/// `ESC !` bit: underline
pub const ANK_UNDERLINE: u8 = 0x80;

/// # Kanji Print Mode (FS ! n)
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | FS ! n  |
/// | Hex     | 1C 21 n |
#[inline]
pub fn kanji_print_mode(n: u8) -> Vec<u8> {
    vec![FS, b'!', n]
}

/// # Single-Byte Print Mode (ESC ! n)
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC ! n |
/// | Hex     | 1B 21 n |
#[inline]
pub fn print_mode(n: u8) -> Vec<u8> {
    vec![ESC, b'!', n]
}

/// # Reverse Printing On (GS B 1)
///
/// White characters on a black background, for both single- and
/// double-byte characters.
#[inline]
pub fn reverse_on() -> Vec<u8> {
    vec![GS, b'B', 1]
}

/// Reverse printing off (GS B 0)
#[inline]
pub fn reverse_off() -> Vec<u8> {
    vec![GS, b'B', 0]
}

// ============================================================================
// ATTRIBUTE BUILDER
// ============================================================================

/// Attributes for one print call
///
/// ## Example
///
/// ```
/// use gaiji::protocol::text::PrintAttributes;
///
/// let attrs = PrintAttributes::new().double_width(true).underline(true);
/// assert_eq!(attrs.set_commands(), vec![0x1C, 0x21, 0x84]);
/// assert_eq!(attrs.clear_commands(), vec![0x1C, 0x21, 0x00]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintAttributes {
    pub double_width: bool,
    pub double_height: bool,
    pub underline: bool,
    pub reverse: bool,
    /// Also apply width/height/underline to single-byte characters
    pub single_byte: bool,
}

impl PrintAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn double_width(mut self, enabled: bool) -> Self {
        self.double_width = enabled;
        self
    }

    pub fn double_height(mut self, enabled: bool) -> Self {
        self.double_height = enabled;
        self
    }

    pub fn underline(mut self, enabled: bool) -> Self {
        self.underline = enabled;
        self
    }

    pub fn reverse(mut self, enabled: bool) -> Self {
        self.reverse = enabled;
        self
    }

    pub fn single_byte(mut self, enabled: bool) -> Self {
        self.single_byte = enabled;
        self
    }

    /// `FS !` parameter for these attributes
    pub fn kanji_bits(&self) -> u8 {
        let mut n = 0;
        if self.double_width {
            n |= KANJI_DOUBLE_WIDTH;
        }
        if self.double_height {
            n |= KANJI_DOUBLE_HEIGHT;
        }
        if self.underline {
            n |= KANJI_UNDERLINE;
        }
        n
    }

    /// `ESC !` parameter for these attributes
    pub fn ank_bits(&self) -> u8 {
        let mut n = 0;
        if self.double_width {
            n |= ANK_DOUBLE_WIDTH;
        }
        if self.double_height {
            n |= ANK_DOUBLE_HEIGHT;
        }
        if self.underline {
            n |= ANK_UNDERLINE;
        }
        n
    }

    /// Commands emitted before the text body
    pub fn set_commands(&self) -> Vec<u8> {
        let mut cmds = Vec::new();
        let n = self.kanji_bits();
        if n != 0 {
            if self.single_byte {
                cmds.extend(print_mode(self.ank_bits()));
            }
            cmds.extend(kanji_print_mode(n));
        }
        if self.reverse {
            cmds.extend(reverse_on());
        }
        cmds
    }

    /// Commands emitted after the text body, undoing exactly what
    /// [`set_commands`](Self::set_commands) turned on
    pub fn clear_commands(&self) -> Vec<u8> {
        let mut cmds = Vec::new();
        if self.kanji_bits() != 0 {
            if self.single_byte {
                cmds.extend(print_mode(0));
            }
            cmds.extend(kanji_print_mode(0));
        }
        if self.reverse {
            cmds.extend(reverse_off());
        }
        cmds
    }
}

// ============================================================================
// TESTS
// ============================================================================
