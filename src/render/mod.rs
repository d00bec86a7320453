//! # Rendering Module
//!
//! Turns characters into the bitmaps the printer's glyph RAM expects.
//!
//! ## Modules
//!
//! - [`bitmap`]: Fixed-size monochrome glyph cells
//! - [`rasterize`]: Font engine seam and the ab_glyph implementation
//! - [`pack`]: Column-major bit packing for `FS 2` / `ESC &`
//!
//! ## Usage Example
//!
//! ```no_run
//! use gaiji::printer::config::FontProfile;
//! use gaiji::render::{CellSize, GlyphRasterizer, TtfRasterizer, pack};
//!
//! let mut rasterizer = TtfRasterizer::new();
//! let kanji = FontProfile::new("NotoSansJP-Medium.otf", 24, 0, -8);
//!
//! let bitmap = rasterizer.rasterize('丂', &kanji, CellSize::Double)?;
//! let bytes = pack::pack_columns(&bitmap);
//! assert_eq!(bytes.len(), 72);
//! # Ok::<(), gaiji::GaijiError>(())
//! ```

pub mod bitmap;
pub mod pack;
pub mod rasterize;

pub use bitmap::{CellSize, GlyphBitmap};
pub use rasterize::{FontCache, GlyphRasterizer, TtfRasterizer};
