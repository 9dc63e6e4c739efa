//! Availability probe that binds real sockets.

use std::net::{IpAddr, Ipv4Addr, TcpListener, UdpSocket};

use tracing::debug;

use crate::domain::Protocol;
use crate::ports::AvailabilityProbe;

/// Probes a port by binding it on `bind_ip` and dropping the socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketProbe {
    bind_ip: IpAddr,
}

impl SocketProbe {
    /// Create a probe that binds on all local IPv4 interfaces.
    pub fn new() -> Self {
        Self::with_ip(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
    }

    /// Create a probe bound to a specific local address.
    pub fn with_ip(bind_ip: IpAddr) -> Self {
        Self { bind_ip }
    }
}

impl Default for SocketProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl AvailabilityProbe for SocketProbe {
    fn is_available(&self, port: u16, protocol: Protocol) -> bool {
        // The socket is dropped at the end of each arm.
        let result = match protocol {
            Protocol::Tcp => TcpListener::bind((self.bind_ip, port)).map(drop),
            Protocol::Udp => UdpSocket::bind((self.bind_ip, port)).map(drop),
        };

        match result {
            Ok(()) => true,
            Err(e) => {
                debug!(port = port, protocol = %protocol, error = %e, "Port is not bindable");
                false
            }
        }
    }
}
