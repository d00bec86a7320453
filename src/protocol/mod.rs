//! # ESC/POS Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/POS protocol
//! spoken by Epson TM-series thermal receipt printers (Japanese models).
//!
//! ## Module Structure
//!
//! - [`commands`]: Session setup (code page, kanji mode) and paper control
//! - [`gaiji`]: Custom glyph definition and selection framing
//! - [`text`]: Print-mode attributes (double size, underline, reverse)
//!
//! ## Usage Example
//!
//! ```
//! use ::gaiji::protocol::{commands, gaiji, text::PrintAttributes};
//!
//! let mut data = Vec::new();
//!
//! // Kanji mode, Shift_JIS
//! data.extend(commands::session_init());
//!
//! // Upload a blank 24x24 glyph into slot EC 40, then print it underlined
//! data.extend(gaiji::define_gaiji(0x40, &[0u8; 72]));
//! let attrs = PrintAttributes::new().underline(true);
//! data.extend(attrs.set_commands());
//! data.extend(gaiji::select_gaiji(0x40));
//! data.extend(attrs.clear_commands());
//!
//! data.extend(commands::cut());
//! ```
//!
//! ## Protocol Reference
//!
//! Based on the "ESC/POS Application Programming Guide" command set as
//! implemented by the TM-T88IV (Japanese model).

pub mod commands;
pub mod gaiji;
pub mod text;
