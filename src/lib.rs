//! # Gaiji - Mixed-Script Printing for ESC/POS Receipt Printers
//!
//! Gaiji prints text the printer's resident font cannot: supplementary and
//! JIS X 0213 kanji, Hangul, Bengali, simplified and traditional Han, emoji.
//! Such characters are rasterized from font files, uploaded into the
//! printer's user-defined glyph (gaiji) RAM and referenced by code. A small
//! LRU cache keeps recently used glyphs resident across print calls.
//!
//! - **Protocol**: ESC/POS session, attribute and gaiji command builders
//! - **Charsets**: JIS tables, emoji ranges, Shift_JIS encoding, classifier
//! - **Rendering**: ab_glyph rasterization and column-major bit packing
//! - **Cache**: Two fixed-size glyph pools with LRU eviction
//! - **Transport**: Raw TCP and in-memory backends
//!
//! ## Quick Start
//!
//! ```no_run
//! use gaiji::{
//!     printer::{PrinterSession, SessionConfig},
//!     protocol::text::PrintAttributes,
//!     transport::NetworkTransport,
//! };
//!
//! // Table and font paths, with defaults for anything omitted
//! let config = SessionConfig::from_file("gaiji.json")?;
//!
//! // Open connection to printer
//! let transport = NetworkTransport::connect("192.168.10.21", 9100)?;
//! let mut session = PrinterSession::open(transport, &config)?;
//!
//! // Resident characters go out as Shift_JIS, the rest as gaiji
//! session.print_text("外字登録😁なので文字の途中👍👍で使えます🛰\n", &PrintAttributes::default())?;
//! session.print_text("ABC👍亜丂俱যে\n", &PrintAttributes::new().underline(true))?;
//! session.cut()?;
//!
//! # Ok::<(), gaiji::error::GaijiError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/POS command builders |
//! | [`charset`] | Character classification |
//! | [`render`] | Glyph rasterization and packing |
//! | [`cache`] | Glyph slot pools |
//! | [`printer`] | Configuration and print session |
//! | [`transport`] | Communication backends |
//! | [`error`] | Error types |
//!
//! ## Supported Printers
//!
//! Currently tested with:
//! - Epson TM-T88IV (Japanese model, Ethernet)

pub mod cache;
pub mod charset;
pub mod error;
pub mod printer;
pub mod protocol;
pub mod render;
pub mod transport;

// Re-exports for convenience
pub use error::GaijiError;
pub use printer::{PrinterSession, SessionConfig};
pub use transport::NetworkTransport;
