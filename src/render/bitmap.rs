//! Monochrome glyph bitmaps.

use image::{GrayImage, Luma};

/// Glyph cell dimensions understood by the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellSize {
    /// 12×24, single-byte download characters
    Single,
    /// 24×24, double-byte gaiji
    Double,
}

impl CellSize {
    pub const fn width(self) -> usize {
        match self {
            CellSize::Single => 12,
            CellSize::Double => 24,
        }
    }

    pub const fn height(self) -> usize {
        24
    }
}

/// 1-bit raster of one glyph cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    /// Row-major pixel data: 0 = white, 1 = black.
    pub data: Vec<u8>,
}

impl GlyphBitmap {
    /// All-white bitmap for `cell`
    pub fn blank(cell: CellSize) -> Self {
        Self::filled(cell, false)
    }

    pub fn filled(cell: CellSize, black: bool) -> Self {
        let (width, height) = (cell.width(), cell.height());
        Self {
            width,
            height,
            data: vec![black as u8; width * height],
        }
    }

    /// Quantize an 8-bit grayscale canvas: any pixel that is not pure
    /// white becomes black.
    pub fn from_luma(image: &GrayImage) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let data = image
            .pixels()
            .map(|p| u8::from(p.0[0] < 255))
            .collect();
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[y * self.width + x] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, black: bool) {
        self.data[y * self.width + x] = black as u8;
    }

    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&p| p == 0)
    }

    /// Black-on-white image for previews
    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            if self.get(x as usize, y as usize) {
                Luma([0])
            } else {
                Luma([255])
            }
        })
    }
}
