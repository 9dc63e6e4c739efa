//! Availability probe port (interface).

use crate::domain::Protocol;

/// Port for checking whether a local port is free.
pub trait AvailabilityProbe: Send + Sync {
    /// Try to bind `port` for `protocol` and release it immediately.
    ///
    /// Returns `true` if the bind succeeded. A positive answer is only valid
    /// at call time; another process may take the port afterwards.
    fn is_available(&self, port: u16, protocol: Protocol) -> bool;
}
