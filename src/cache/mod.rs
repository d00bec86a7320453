//! # Glyph Cache
//!
//! The printer has room for 94 gaiji and 95 download characters. This
//! module keeps track of which character is defined in which slot so each
//! glyph is uploaded once and then referenced by code until it falls out
//! of the least-recently-used end of its pool.
//!
//! - [`pool`]: Recency-ordered slot bookkeeping
//! - [`manager`]: Hit/miss handling, rasterize → pack → define → select

pub mod manager;
pub mod pool;

pub use manager::{GlyphCache, PoolKind};
pub use pool::{Slot, SlotPool};
