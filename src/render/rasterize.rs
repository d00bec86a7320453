//! TrueType/OpenType glyph rasterization into fixed-size cells.
//!
//! Draws one character with ab_glyph onto a white 8-bit canvas, then
//! quantizes it to a [`GlyphBitmap`]. The pen sits at the profile's
//! `(offset_x, offset_y)` and the baseline one font ascent below it, so an
//! offset of `(0, 0)` puts the top of the tallest glyphs at the top edge.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};
use image::{GrayImage, Luma};
use log::{debug, warn};

use super::bitmap::{CellSize, GlyphBitmap};
use crate::error::GaijiError;
use crate::printer::config::FontProfile;

/// Font engine seam: render one character into a cell-sized bitmap.
pub trait GlyphRasterizer {
    /// A glyph missing from the font yields a blank bitmap, not an error.
    fn rasterize(
        &mut self,
        ch: char,
        profile: &FontProfile,
        cell: CellSize,
    ) -> Result<GlyphBitmap, GaijiError>;
}

/// A parsed font with its pixel scale resolved for one size.
#[derive(Clone)]
pub struct LoadedFont {
    pub font: FontArc,
    pub scale: PxScale,
}

/// Parsed fonts keyed by (path, pixel size).
///
/// Entries are never evicted; the key set is bounded by the handful of
/// profiles in the session configuration.
#[derive(Default)]
pub struct FontCache {
    fonts: HashMap<(PathBuf, u32), LoadedFont>,
}

impl FontCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Get the font for `(path, size)`, parsing it on first use.
    pub fn get(&mut self, path: &Path, size: u32) -> Result<&LoadedFont, GaijiError> {
        let key = (path.to_path_buf(), size);
        if !self.fonts.contains_key(&key) {
            let loaded = load_font(path, size)?;
            debug!("font cache: loaded {} at {}px", path.display(), size);
            self.fonts.insert(key.clone(), loaded);
        }
        Ok(&self.fonts[&key])
    }
}

/// Read and parse a font file, resolving `size` as the em size in pixels.
fn load_font(path: &Path, size: u32) -> Result<LoadedFont, GaijiError> {
    let bytes = std::fs::read(path).map_err(|e| {
        GaijiError::FontRender(format!("Failed to read font {}: {}", path.display(), e))
    })?;
    let font = FontArc::try_from_vec(bytes).map_err(|e| {
        GaijiError::FontRender(format!("Failed to parse font {}: {}", path.display(), e))
    })?;
    let units_per_em = font.units_per_em().ok_or_else(|| {
        GaijiError::FontRender(format!("Font {} has no units-per-em", path.display()))
    })?;

    // PxScale is ascent-to-descent height, not em size
    let scale = PxScale::from(size as f32 * font.height_unscaled() / units_per_em);
    Ok(LoadedFont { font, scale })
}

/// Draw a character from `loaded` onto a white canvas of `cell` size.
pub fn draw_glyph(
    loaded: &LoadedFont,
    ch: char,
    offset_x: i32,
    offset_y: i32,
    cell: CellSize,
) -> Option<GrayImage> {
    let (width, height) = (cell.width() as i32, cell.height() as i32);
    let mut canvas = GrayImage::from_pixel(width as u32, height as u32, Luma([255]));

    let glyph_id = loaded.font.glyph_id(ch);
    if glyph_id.0 == 0 {
        return None;
    }

    let ascent = loaded.font.as_scaled(loaded.scale).ascent();
    let glyph = glyph_id.with_scale_and_position(
        loaded.scale,
        point(offset_x as f32, offset_y as f32 + ascent),
    );

    if let Some(outlined) = loaded.font.outline_glyph(glyph) {
        let bounds = outlined.px_bounds();
        outlined.draw(|px, py, coverage| {
            let x = px as i32 + bounds.min.x as i32;
            let y = py as i32 + bounds.min.y as i32;

            if x >= 0 && x < width && y >= 0 && y < height {
                let ink = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
                let pixel = canvas.get_pixel_mut(x as u32, y as u32);
                pixel.0[0] = pixel.0[0].saturating_sub(ink);
            }
        });
    }

    Some(canvas)
}

/// [`GlyphRasterizer`] backed by font files on disk.
#[derive(Default)]
pub struct TtfRasterizer {
    fonts: FontCache,
}

impl TtfRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_cache(&self) -> &FontCache {
        &self.fonts
    }
}

impl GlyphRasterizer for TtfRasterizer {
    fn rasterize(
        &mut self,
        ch: char,
        profile: &FontProfile,
        cell: CellSize,
    ) -> Result<GlyphBitmap, GaijiError> {
        let loaded = self.fonts.get(&profile.font, profile.size)?;

        match draw_glyph(loaded, ch, profile.offset_x, profile.offset_y, cell) {
            Some(canvas) => Ok(GlyphBitmap::from_luma(&canvas)),
            None => {
                warn!(
                    "{} (U+{:04X}) missing from {}, printing blank",
                    ch,
                    ch as u32,
                    profile.font.display()
                );
                Ok(GlyphBitmap::blank(cell))
            }
        }
    }
}
