//! # Printer Session
//!
//! A session owns everything that must outlive a single print call: the
//! transport, the character tables, the font cache and both glyph pools.
//! Glyphs uploaded during one call stay resident for the next, which is
//! what makes repeated kanji and emoji cheap.
//!
//! ## Example
//!
//! ```no_run
//! use gaiji::printer::{PrinterSession, SessionConfig};
//! use gaiji::protocol::text::PrintAttributes;
//! use gaiji::transport::NetworkTransport;
//!
//! let config = SessionConfig::from_file("gaiji.json")?;
//! let transport = NetworkTransport::connect("192.168.10.21", 9100)?;
//! let mut session = PrinterSession::open(transport, &config)?;
//!
//! session.print_text("JIS0213：俱剝瘦繫 👍\n", &PrintAttributes::default())?;
//! session.print_text("横倍拡大\n", &PrintAttributes::new().double_width(true))?;
//! session.cut()?;
//! # Ok::<(), gaiji::GaijiError>(())
//! ```

use log::{info, warn};

use super::config::{PrinterModel, SessionConfig};
use crate::cache::{GlyphCache, PoolKind};
use crate::charset::classify::FontProfiles;
use crate::charset::{Classification, Classifier, JisTables, UnicodeEmoji};
use crate::error::GaijiError;
use crate::protocol::commands;
use crate::protocol::text::PrintAttributes;
use crate::render::{GlyphRasterizer, TtfRasterizer};
use crate::transport::Transport;

/// An open connection to one printer plus its glyph cache state.
pub struct PrinterSession<T, R = TtfRasterizer> {
    transport: T,
    classifier: Classifier,
    cache: GlyphCache<R>,
    model: PrinterModel,
}

impl<T: Transport> PrinterSession<T> {
    /// Validate `config`, load the JIS tables and initialize the printer.
    pub fn open(transport: T, config: &SessionConfig) -> Result<Self, GaijiError> {
        config.validate()?;

        let tables = JisTables::load(
            &config.jis0201_file,
            &config.jis0208_file,
            &config.jis0212_file,
            &config.jis0213_file,
        )?;
        let classifier = Classifier::new(tables, UnicodeEmoji, FontProfiles::from_config(config));

        Self::with_parts(transport, classifier, TtfRasterizer::new(), PrinterModel::TM88IV)
    }
}

impl<T: Transport, R: GlyphRasterizer> PrinterSession<T, R> {
    /// Assemble a session from prebuilt parts and send the init sequence.
    pub fn with_parts(
        mut transport: T,
        classifier: Classifier,
        rasterizer: R,
        model: PrinterModel,
    ) -> Result<Self, GaijiError> {
        let cache = GlyphCache::new(&model, rasterizer)?;

        transport.write_all(&commands::session_init())?;
        transport.flush()?;
        info!("session opened ({})", model.name);

        Ok(Self {
            transport,
            classifier,
            cache,
            model,
        })
    }

    /// Print `text` with `attrs` applied to exactly this text.
    ///
    /// Characters are emitted in order, one at a time: resident characters
    /// as Shift_JIS, everything else as gaiji (defined on first use). No
    /// wrapping or width accounting is done; include `\n` to end a line.
    ///
    /// If a glyph fails to render, the attributes are still cleared before
    /// the error is returned. A transport error returns immediately.
    pub fn print_text(&mut self, text: &str, attrs: &PrintAttributes) -> Result<(), GaijiError> {
        let set = attrs.set_commands();
        if !set.is_empty() {
            self.transport.write_all(&set)?;
        }

        let body = self.write_chars(text);
        if let Err(GaijiError::Transport(_)) = body {
            return body;
        }

        let clear = attrs.clear_commands();
        let closed = if clear.is_empty() {
            Ok(())
        } else {
            self.transport.write_all(&clear)
        };
        let flushed = closed.and_then(|()| self.transport.flush());

        if let Err(e) = &body {
            warn!("print aborted: {}", e);
        }
        body.and(flushed)
    }

    fn write_chars(&mut self, text: &str) -> Result<(), GaijiError> {
        for ch in text.chars() {
            let bytes = match self.classifier.classify(ch) {
                Classification::Builtin(bytes) => bytes,
                Classification::Custom { profile, .. } => {
                    self.cache
                        .select(ch, profile, PoolKind::DoubleByte, &mut self.transport)?
                }
            };
            self.transport.write_all(&bytes)?;
        }
        Ok(())
    }

    /// Feed to the cutter and cut.
    pub fn cut(&mut self) -> Result<(), GaijiError> {
        self.transport.write_all(&commands::cut())?;
        self.transport.flush()
    }

    pub fn model(&self) -> &PrinterModel {
        &self.model
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn cache(&self) -> &GlyphCache<R> {
        &self.cache
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Close the session, handing back the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::JisSet;
    use crate::printer::config::FontProfile;
    use crate::render::{CellSize, GlyphBitmap};
    use crate::transport::MemoryTransport;

    struct BlankRasterizer;

    impl GlyphRasterizer for BlankRasterizer {
        fn rasterize(&mut self, _: char, _: &FontProfile, cell: CellSize) -> Result<GlyphBitmap, GaijiError> {
            Ok(GlyphBitmap::blank(cell))
        }
    }

    struct FailingRasterizer;

    impl GlyphRasterizer for FailingRasterizer {
        fn rasterize(&mut self, _: char, _: &FontProfile, _: CellSize) -> Result<GlyphBitmap, GaijiError> {
            Err(GaijiError::FontRender("corrupt font".to_string()))
        }
    }

    fn session() -> PrinterSession<MemoryTransport, BlankRasterizer> {
        session_with(BlankRasterizer)
    }

    fn session_with<R: GlyphRasterizer>(rasterizer: R) -> PrinterSession<MemoryTransport, R> {
        let mut tables = JisTables::new();
        tables.insert(JisSet::X0208, 'あ');
        tables.insert(JisSet::X0212, '丂');
        let classifier = Classifier::new(
            tables,
            UnicodeEmoji,
            FontProfiles::from_config(&SessionConfig::default()),
        );
        PrinterSession::with_parts(
            MemoryTransport::new(),
            classifier,
            rasterizer,
            PrinterModel::TM88IV,
        )
        .unwrap()
    }

    #[test]
    fn test_open_sends_init() {
        let s = session();
        assert_eq!(s.transport().bytes(), commands::session_init().as_slice());
    }

    #[test]
    fn test_open_rejects_missing_files() {
        let config = SessionConfig {
            jis0201_file: "/nonexistent/JIS0201.TXT".into(),
            ..SessionConfig::default()
        };
        let result = PrinterSession::open(MemoryTransport::new(), &config);
        assert!(matches!(result, Err(GaijiError::Configuration(_))));
    }

    #[test]
    fn test_builtin_text() {
        let mut s = session();
        s.transport_mut().take();

        s.print_text("Aあ\n", &PrintAttributes::default()).unwrap();

        assert_eq!(s.transport().bytes(), &[0x41, 0x82, 0xA0, 0x0A]);
    }

    #[test]
    fn test_gaiji_definition_precedes_selection() {
        let mut s = session();
        s.transport_mut().take();

        s.print_text("x丂", &PrintAttributes::default()).unwrap();

        let out = s.transport().bytes();
        assert_eq!(out[0], b'x');
        assert_eq!(&out[1..5], &[0x1C, 0x32, 0xEC, 0x40]);
        assert_eq!(&out[5 + 72..], &[0xEC, 0x40]);
    }

    #[test]
    fn test_glyphs_persist_across_calls() {
        let mut s = session();
        s.print_text("丂", &PrintAttributes::default()).unwrap();
        s.transport_mut().take();

        s.print_text("丂", &PrintAttributes::default()).unwrap();

        assert_eq!(s.transport().bytes(), &[0xEC, 0x40]);
    }

    #[test]
    fn test_cut() {
        let mut s = session();
        s.transport_mut().take();
        s.cut().unwrap();
        assert_eq!(s.transport().bytes(), commands::cut().as_slice());
    }

    #[test]
    fn test_render_failure_still_clears_attributes() {
        let mut s = session_with(FailingRasterizer);
        s.transport_mut().take();
        let flushes = s.transport().flushes();

        let err = s
            .print_text("A丂B", &PrintAttributes::new().underline(true))
            .unwrap_err();

        assert!(matches!(err, GaijiError::FontRender(_)));
        assert_eq!(
            s.transport_mut().take(),
            vec![0x1C, 0x21, 0x80, b'A', 0x1C, 0x21, 0x00]
        );
        assert_eq!(s.transport().flushes(), flushes + 1);

        // The next call starts from a clean attribute state
        s.print_text("plain", &PrintAttributes::default()).unwrap();
        assert_eq!(s.transport_mut().take(), b"plain".to_vec());
    }
}
