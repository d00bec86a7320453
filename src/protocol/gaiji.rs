//! # Custom Glyph (Gaiji) Commands
//!
//! Japanese ESC/POS printers keep two small banks of user-definable glyphs
//! in RAM:
//!
//! | Bank | Define | Select | Cell | Codes |
//! |------|--------|--------|------|-------|
//! | Gaiji (double-byte) | `FS 2` | `EC c2` inline | 24×24 | 94 |
//! | Download chars (single-byte) | `ESC &` | `ESC % 1` … `ESC % 0` | 12×24 | 95 |
//!
//! Both banks take bitmaps in the column-major layout produced by
//! [`crate::render::pack`]: three bytes per column, MSB at the top.
//!
//! ## Gaiji Code Space
//!
//! ```text
//! c1 = 0xEC (a Shift_JIS user-defined lead byte)
//! c2 = 0x40..=0x7E, 0x80..=0x9E
//! ```
//!
//! Definitions survive until power-off or redefinition; they are not
//! cleared by `ESC @`.

use super::commands::{ESC, FS};

/// Lead byte shared by every gaiji code
pub const GAIJI_HIGH_BYTE: u8 = 0xEC;

/// Packed bitmap length of one 24×24 gaiji (24 columns × 3 bytes)
pub const GAIJI_BITMAP_LEN: usize = 72;

/// Bytes per column for both banks (24 dots / 8)
pub const COLUMN_BYTES: u8 = 3;

/// Columns in one download character (Font A is 12 dots wide)
pub const DOWNLOAD_CHAR_WIDTH: u8 = 12;

/// Packed bitmap length of one 12×24 download character
pub const DOWNLOAD_BITMAP_LEN: usize = DOWNLOAD_CHAR_WIDTH as usize * COLUMN_BYTES as usize;

/// Low bytes addressable as gaiji, in device order (94 codes).
pub fn gaiji_codes() -> Vec<u8> {
    (0x40..=0x7E).chain(0x80..=0x9E).collect()
}

/// Single-byte codes addressable as download characters (95 codes).
pub fn download_codes() -> Vec<u8> {
    (0x20..=0x7E).collect()
}

/// # Define Gaiji (FS 2 c1 c2 d1...d72)
///
/// Uploads one 24×24 bitmap into the gaiji slot `c2`.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | FS 2 c1 c2 d1...d72 |
/// | Hex     | 1C 32 EC c2 d1...d72 |
///
/// ## Example
///
/// ```
/// use gaiji::protocol::gaiji::define_gaiji;
///
/// let cmd = define_gaiji(0x41, &[0xFF; 72]);
/// assert_eq!(&cmd[0..4], &[0x1C, 0x32, 0xEC, 0x41]);
/// assert_eq!(cmd.len(), 4 + 72);
/// ```
pub fn define_gaiji(c2: u8, bitmap: &[u8]) -> Vec<u8> {
    debug_assert!(
        bitmap.len() == GAIJI_BITMAP_LEN,
        "Gaiji bitmap must be exactly {} bytes, got {}",
        GAIJI_BITMAP_LEN,
        bitmap.len()
    );

    let mut cmd = Vec::with_capacity(4 + bitmap.len());
    cmd.push(FS);
    cmd.push(b'2');
    cmd.push(GAIJI_HIGH_BYTE);
    cmd.push(c2);
    cmd.extend_from_slice(bitmap);
    cmd
}

/// Inline bytes that print gaiji `c2` (kanji mode must be on)
#[inline]
pub fn select_gaiji(c2: u8) -> Vec<u8> {
    vec![GAIJI_HIGH_BYTE, c2]
}

/// # Define Download Character (ESC & y c1 c2 x d1...d(y×x))
///
/// Uploads a single 12×24 character into code `code`. The first and last
/// code are the same, so exactly one character is defined per command.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC & 3 c c 12 d1...d36 |
/// | Hex     | 1B 26 03 c c 0C d1...d36 |
pub fn define_download_char(code: u8, bitmap: &[u8]) -> Vec<u8> {
    debug_assert!(
        bitmap.len() == DOWNLOAD_BITMAP_LEN,
        "Download character bitmap must be exactly {} bytes, got {}",
        DOWNLOAD_BITMAP_LEN,
        bitmap.len()
    );

    let mut cmd = Vec::with_capacity(6 + bitmap.len());
    cmd.extend([ESC, b'&', COLUMN_BYTES, code, code, DOWNLOAD_CHAR_WIDTH]);
    cmd.extend_from_slice(bitmap);
    cmd
}

/// # Download Character Set On/Off (ESC % n)
#[inline]
pub fn download_set(enabled: bool) -> Vec<u8> {
    vec![ESC, b'%', enabled as u8]
}

/// Inline bytes that print download character `code`.
///
/// The download set is switched on only around this one byte so that the
/// surrounding text keeps using the resident font.
pub fn select_download_char(code: u8) -> Vec<u8> {
    let mut cmd = download_set(true);
    cmd.push(code);
    cmd.extend(download_set(false));
    cmd
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_spaces() {
        let gaiji = gaiji_codes();
        assert_eq!(gaiji.len(), 94);
        assert_eq!(gaiji.first(), Some(&0x40));
        assert_eq!(gaiji.last(), Some(&0x9E));
        assert!(!gaiji.contains(&0x7F));

        let download = download_codes();
        assert_eq!(download.len(), 95);
        assert_eq!(download.first(), Some(&0x20));
        assert_eq!(download.last(), Some(&0x7E));
    }

    #[test]
    fn test_define_gaiji() {
        let bitmap: Vec<u8> = (0..72).collect();
        let cmd = define_gaiji(0x9E, &bitmap);
        assert_eq!(&cmd[..4], &[0x1C, 0x32, 0xEC, 0x9E]);
        assert_eq!(&cmd[4..], bitmap.as_slice());
    }

    #[test]
    fn test_select_gaiji() {
        assert_eq!(select_gaiji(0x40), vec![0xEC, 0x40]);
    }

    #[test]
    fn test_define_download_char() {
        let cmd = define_download_char(0x21, &[0xAA; 36]);
        assert_eq!(&cmd[..6], &[0x1B, 0x26, 0x03, 0x21, 0x21, 0x0C]);
        assert_eq!(cmd.len(), 6 + 36);
        assert!(cmd[6..].iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn test_select_download_char() {
        assert_eq!(
            select_download_char(0x41),
            vec![0x1B, 0x25, 0x01, 0x41, 0x1B, 0x25, 0x00]
        );
    }
}
