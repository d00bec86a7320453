//! # Column-Major Bit Packing
//!
//! ESC/POS glyph definitions (`FS 2`, `ESC &`) take their bitmap one
//! column at a time, each column as a run of vertical bytes:
//!
//! ```text
//!           col 0   col 1   col 2  ...
//! rows 0-7   d0      d3      d6
//! rows 8-15  d1      d4      d7
//! rows 16-23 d2      d5      d8
//!
//! Each byte: bit7 = top dot, bit0 = bottom dot, 1 = black
//! ```
//!
//! A 24×24 gaiji packs to 72 bytes and a 12×24 download character to 36.

use super::bitmap::GlyphBitmap;

/// Pack a bitmap into column-major, MSB-first vertical bytes.
///
/// ## Example
///
/// ```
/// use gaiji::render::{CellSize, GlyphBitmap, pack};
///
/// let black = GlyphBitmap::filled(CellSize::Double, true);
/// assert_eq!(pack::pack_columns(&black), vec![0xFF; 72]);
/// ```
pub fn pack_columns(bitmap: &GlyphBitmap) -> Vec<u8> {
    debug_assert!(
        bitmap.height % 8 == 0,
        "Glyph height must be a multiple of 8, got {}",
        bitmap.height
    );

    let mut out = Vec::with_capacity(bitmap.width * bitmap.height / 8);
    for x in 0..bitmap.width {
        for band in (0..bitmap.height).step_by(8) {
            let mut byte = 0u8;
            for bit in 0..8 {
                if bitmap.get(x, band + bit) {
                    byte |= 0x80 >> bit;
                }
            }
            out.push(byte);
        }
    }
    out
}
