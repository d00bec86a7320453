//! # Glyph Cache Manager
//!
//! Produces the inline bytes that print one custom character, defining the
//! glyph on the device first when it is not already resident.
//!
//! ## Flow
//!
//! ```text
//! select(ch)
//!   ├─ hit  → touch slot → selection bytes
//!   └─ miss → LRU slot → rasterize → pack → send definition
//!                      → assign slot → selection bytes
//! ```
//!
//! A resident glyph is never redefined. The pool is only updated after the
//! definition reaches the transport; a failed send empties the slot because
//! the device may hold a half-written bitmap.

use log::{debug, trace};

use super::pool::SlotPool;
use crate::error::GaijiError;
use crate::printer::config::{FontProfile, PrinterModel};
use crate::protocol::gaiji;
use crate::render::{CellSize, GlyphRasterizer, pack};
use crate::transport::Transport;

/// Which glyph bank a character goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolKind {
    /// 12×24 download characters (`ESC &`, `ESC %`)
    SingleByte,
    /// 24×24 gaiji (`FS 2`, `EC c2`)
    DoubleByte,
}

impl PoolKind {
    pub fn cell(self) -> CellSize {
        match self {
            PoolKind::SingleByte => CellSize::Single,
            PoolKind::DoubleByte => CellSize::Double,
        }
    }

    fn define(self, code: u8, bitmap: &[u8]) -> Vec<u8> {
        match self {
            PoolKind::SingleByte => gaiji::define_download_char(code, bitmap),
            PoolKind::DoubleByte => gaiji::define_gaiji(code, bitmap),
        }
    }

    fn select(self, code: u8) -> Vec<u8> {
        match self {
            PoolKind::SingleByte => gaiji::select_download_char(code),
            PoolKind::DoubleByte => gaiji::select_gaiji(code),
        }
    }
}

/// Both glyph pools plus the rasterizer that fills them.
pub struct GlyphCache<R> {
    rasterizer: R,
    download: SlotPool,
    gaiji: SlotPool,
}

impl<R: GlyphRasterizer> GlyphCache<R> {
    pub fn new(model: &PrinterModel, rasterizer: R) -> Result<Self, GaijiError> {
        Ok(Self {
            rasterizer,
            download: SlotPool::new(model.download_codes())?,
            gaiji: SlotPool::new(model.gaiji_codes())?,
        })
    }

    /// Build from explicit pools (smaller code spaces, tests).
    pub fn with_pools(rasterizer: R, download: SlotPool, gaiji: SlotPool) -> Self {
        Self {
            rasterizer,
            download,
            gaiji,
        }
    }

    pub fn pool(&self, kind: PoolKind) -> &SlotPool {
        match kind {
            PoolKind::SingleByte => &self.download,
            PoolKind::DoubleByte => &self.gaiji,
        }
    }

    fn pool_mut(&mut self, kind: PoolKind) -> &mut SlotPool {
        match kind {
            PoolKind::SingleByte => &mut self.download,
            PoolKind::DoubleByte => &mut self.gaiji,
        }
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Bytes that print `ch` from `kind`'s pool, defining it first on a miss.
    pub fn select<T: Transport + ?Sized>(
        &mut self,
        ch: char,
        profile: &FontProfile,
        kind: PoolKind,
        transport: &mut T,
    ) -> Result<Vec<u8>, GaijiError> {
        if let Some(code) = self.pool_mut(kind).touch(ch) {
            trace!("{:?} hit {} (U+{:04X}) at {:#04X}", kind, ch, ch as u32, code);
            return Ok(kind.select(code));
        }

        let code = self.pool(kind).lru().code;
        let bitmap = self.rasterizer.rasterize(ch, profile, kind.cell())?;
        let packed = pack::pack_columns(&bitmap);

        if let Err(e) = transport.write_all(&kind.define(code, &packed)) {
            self.pool_mut(kind).vacate(code);
            return Err(e);
        }

        let (assigned, evicted) = self.pool_mut(kind).assign_lru(ch);
        debug_assert_eq!(assigned, code);
        match evicted {
            Some(old) => debug!(
                "{:?} defined {} (U+{:04X}) at {:#04X}, evicted {}",
                kind, ch, ch as u32, code, old
            ),
            None => debug!("{:?} defined {} (U+{:04X}) at {:#04X}", kind, ch, ch as u32, code),
        }

        Ok(kind.select(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::GlyphBitmap;
    use crate::transport::MemoryTransport;

    /// Draws every glyph as a solid block and counts calls.
    #[derive(Default)]
    struct SolidRasterizer {
        calls: Vec<char>,
    }

    impl GlyphRasterizer for SolidRasterizer {
        fn rasterize(
            &mut self,
            ch: char,
            _profile: &FontProfile,
            cell: CellSize,
        ) -> Result<GlyphBitmap, GaijiError> {
            self.calls.push(ch);
            Ok(GlyphBitmap::filled(cell, true))
        }
    }

    struct FailingRasterizer;

    impl GlyphRasterizer for FailingRasterizer {
        fn rasterize(&mut self, _: char, _: &FontProfile, _: CellSize) -> Result<GlyphBitmap, GaijiError> {
            Err(GaijiError::FontRender("no font".to_string()))
        }
    }

    struct BrokenTransport;

    impl Transport for BrokenTransport {
        fn write_all(&mut self, _: &[u8]) -> Result<(), GaijiError> {
            Err(GaijiError::Transport("connection reset".to_string()))
        }
    }

    fn profile() -> FontProfile {
        FontProfile::new("test.otf", 24, 0, 0)
    }

    fn small_cache(n: u8) -> GlyphCache<SolidRasterizer> {
        GlyphCache::with_pools(
            SolidRasterizer::default(),
            SlotPool::new(0x20..0x20 + n).unwrap(),
            SlotPool::new(0x40..0x40 + n).unwrap(),
        )
    }

    #[test]
    fn test_miss_defines_then_selects() {
        let mut cache = GlyphCache::new(&PrinterModel::TM88IV, SolidRasterizer::default()).unwrap();
        let mut transport = MemoryTransport::new();

        let sel = cache
            .select('丂', &profile(), PoolKind::DoubleByte, &mut transport)
            .unwrap();

        assert_eq!(sel, vec![0xEC, 0x40]);
        let sent = transport.bytes();
        assert_eq!(&sent[..4], &[0x1C, 0x32, 0xEC, 0x40]);
        assert_eq!(&sent[4..], &[0xFF; 72][..]);
    }

    #[test]
    fn test_hit_does_not_rasterize() {
        let mut cache = small_cache(4);
        let mut transport = MemoryTransport::new();

        let first = cache.select('丂', &profile(), PoolKind::DoubleByte, &mut transport).unwrap();
        let sent_after_first = transport.bytes().len();
        let second = cache.select('丂', &profile(), PoolKind::DoubleByte, &mut transport).unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.rasterizer().calls, vec!['丂']);
        assert_eq!(transport.bytes().len(), sent_after_first);
    }

    #[test]
    fn test_single_byte_pool() {
        let mut cache = GlyphCache::new(&PrinterModel::TM88IV, SolidRasterizer::default()).unwrap();
        let mut transport = MemoryTransport::new();

        let sel = cache.select('Ω', &profile(), PoolKind::SingleByte, &mut transport).unwrap();

        assert_eq!(sel, vec![0x1B, 0x25, 0x01, 0x20, 0x1B, 0x25, 0x00]);
        let sent = transport.bytes();
        assert_eq!(&sent[..6], &[0x1B, 0x26, 0x03, 0x20, 0x20, 0x0C]);
        assert_eq!(sent.len(), 6 + 36);
        assert_eq!(cache.pool(PoolKind::DoubleByte).occupied(), 0);
    }

    #[test]
    fn test_eviction_reuses_lru_code() {
        let mut cache = small_cache(3);
        let mut transport = MemoryTransport::new();
        let p = profile();

        for ch in ['a', 'b', 'c'] {
            cache.select(ch, &p, PoolKind::DoubleByte, &mut transport).unwrap();
        }
        cache.select('a', &p, PoolKind::DoubleByte, &mut transport).unwrap();

        // 'b' is least recent and loses slot 0x41
        let sel = cache.select('d', &p, PoolKind::DoubleByte, &mut transport).unwrap();
        assert_eq!(sel, vec![0xEC, 0x41]);
        assert_eq!(cache.pool(PoolKind::DoubleByte).code_of('b'), None);

        // Asking for 'b' again is a fresh definition
        cache.select('b', &p, PoolKind::DoubleByte, &mut transport).unwrap();
        assert_eq!(cache.rasterizer().calls, vec!['a', 'b', 'c', 'd', 'b']);
    }

    #[test]
    fn test_render_failure_leaves_pool_untouched() {
        let mut cache = GlyphCache::with_pools(
            FailingRasterizer,
            SlotPool::new(0x20..0x22).unwrap(),
            SlotPool::new(0x40..0x42).unwrap(),
        );
        let mut transport = MemoryTransport::new();

        let err = cache
            .select('丂', &profile(), PoolKind::DoubleByte, &mut transport)
            .unwrap_err();

        assert!(matches!(err, GaijiError::FontRender(_)));
        assert!(transport.bytes().is_empty());
        assert_eq!(cache.pool(PoolKind::DoubleByte).occupied(), 0);
        assert_eq!(cache.pool(PoolKind::DoubleByte).lru().code, 0x40);
    }

    #[test]
    fn test_transport_failure_vacates_slot() {
        let mut cache = small_cache(2);
        let mut good = MemoryTransport::new();
        let p = profile();

        cache.select('a', &p, PoolKind::DoubleByte, &mut good).unwrap();
        cache.select('b', &p, PoolKind::DoubleByte, &mut good).unwrap();

        // 'c' would overwrite 'a' at 0x40; the write fails mid-definition
        let err = cache
            .select('c', &p, PoolKind::DoubleByte, &mut BrokenTransport)
            .unwrap_err();
        assert!(matches!(err, GaijiError::Transport(_)));

        let pool = cache.pool(PoolKind::DoubleByte);
        assert_eq!(pool.code_of('a'), None);
        assert_eq!(pool.code_of('c'), None);
        assert_eq!(pool.lru().code, 0x40);
        assert_eq!(pool.code_of('b'), Some(0x41));
    }
}
