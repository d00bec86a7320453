//! # Printer Module
//!
//! This module provides printer configuration and the print session.
//!
//! ## Modules
//!
//! - [`config`]: Printer hardware facts and session configuration
//! - [`session`]: Session state and the text printing entry point

pub mod config;
pub mod session;

pub use config::{FontProfile, PrinterModel, SessionConfig};
pub use session::PrinterSession;
