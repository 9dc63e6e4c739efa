//! Socket enumerator port (interface).

use crate::error::Result;

/// Port for listing the sockets currently bound on the host.
///
/// This trait defines the interface for socket enumeration.
/// Implementations return the raw, line-oriented text of a tool such as
/// `ss -tuln`; parsing lives in the domain layer so any text source can be
/// substituted.
pub trait PortEnumerator: Send + Sync {
    /// Run the enumeration and return its combined stdout and stderr.
    ///
    /// Fails with [`crate::Error::Enumeration`] when the tool cannot be
    /// started or exits with a non-zero status.
    fn enumerate(&self) -> impl std::future::Future<Output = Result<String>> + Send;
}
