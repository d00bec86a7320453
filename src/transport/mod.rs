//! # Printer Transport Layer
//!
//! This module provides communication backends for sending data to printers.
//!
//! ## Available Transports
//!
//! - [`network`]: Raw TCP (port 9100) for Ethernet-connected printers
//! - [`memory`]: Captures bytes in memory, for tests and dry runs
//!
//! The core never reads replies; a transport only has to accept bytes in
//! order and report I/O failures.

pub mod memory;
pub mod network;

pub use memory::MemoryTransport;
pub use network::NetworkTransport;

use crate::error::GaijiError;

/// Byte sink for a printer connection.
pub trait Transport {
    /// Queue `data` for the printer, in order.
    fn write_all(&mut self, data: &[u8]) -> Result<(), GaijiError>;

    /// Push any buffered bytes to the device.
    fn flush(&mut self) -> Result<(), GaijiError> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write_all(&mut self, data: &[u8]) -> Result<(), GaijiError> {
        (**self).write_all(data)
    }

    fn flush(&mut self) -> Result<(), GaijiError> {
        (**self).flush()
    }
}
