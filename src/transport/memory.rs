//! In-memory transport.

use super::Transport;
use crate::error::GaijiError;

/// Collects every byte written, in order.
///
/// ## Example
///
/// ```
/// use gaiji::transport::{MemoryTransport, Transport};
///
/// let mut transport = MemoryTransport::new();
/// transport.write_all(b"AB")?;
/// transport.write_all(b"C")?;
/// assert_eq!(transport.bytes(), b"ABC");
/// # Ok::<(), gaiji::GaijiError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryTransport {
    data: Vec<u8>,
    writes: usize,
    flushes: usize,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take the captured bytes, leaving the transport empty.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.data)
    }

    /// Number of `write_all` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl Transport for MemoryTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), GaijiError> {
        self.writes += 1;
        self.data.extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), GaijiError> {
        self.flushes += 1;
        Ok(())
    }
}
