//! # Raw TCP Transport
//!
//! Ethernet ESC/POS printers accept the print stream on a raw TCP socket,
//! conventionally port 9100. Writes are buffered and pushed out on
//! [`Transport::flush`], which the session calls once per print call.
//!
//! ```no_run
//! use gaiji::transport::{NetworkTransport, Transport};
//!
//! let mut transport = NetworkTransport::connect("192.168.10.21", 9100)?;
//! transport.write_all(b"Hello\n")?;
//! transport.flush()?;
//! # Ok::<(), gaiji::GaijiError>(())
//! ```

use std::io::{BufWriter, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use log::info;

use super::Transport;
use crate::error::GaijiError;

/// Default raw printing port
pub const DEFAULT_PORT: u16 = 9100;

/// Default connect and write timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Buffered TCP connection to a printer.
pub struct NetworkTransport {
    stream: BufWriter<TcpStream>,
    peer: String,
}

impl NetworkTransport {
    /// Connect with the default timeout.
    pub fn connect(host: &str, port: u16) -> Result<Self, GaijiError> {
        Self::connect_timeout(host, port, DEFAULT_TIMEOUT)
    }

    /// Connect, trying each resolved address until one answers.
    pub fn connect_timeout(host: &str, port: u16, timeout: Duration) -> Result<Self, GaijiError> {
        let peer = format!("{}:{}", host, port);
        let addrs = (host, port)
            .to_socket_addrs()
            .map_err(|e| GaijiError::Transport(format!("Failed to resolve {}: {}", peer, e)))?;

        let mut last_err = None;
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, timeout) {
                Ok(stream) => {
                    stream.set_write_timeout(Some(timeout)).map_err(|e| {
                        GaijiError::Transport(format!("Failed to configure {}: {}", peer, e))
                    })?;
                    info!("connected to {}", peer);
                    return Ok(Self {
                        stream: BufWriter::new(stream),
                        peer,
                    });
                }
                Err(e) => last_err = Some(e),
            }
        }

        Err(GaijiError::Transport(match last_err {
            Some(e) => format!("Failed to connect to {}: {}", peer, e),
            None => format!("No addresses for {}", peer),
        }))
    }

    pub fn peer(&self) -> &str {
        &self.peer
    }
}

impl Transport for NetworkTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), GaijiError> {
        self.stream
            .write_all(data)
            .map_err(|e| GaijiError::Transport(format!("Write to {} failed: {}", self.peer, e)))
    }

    fn flush(&mut self) -> Result<(), GaijiError> {
        self.stream
            .flush()
            .map_err(|e| GaijiError::Transport(format!("Flush to {} failed: {}", self.peer, e)))
    }
}
