//! Error types for the port-randomizer-core library.

use thiserror::Error;

/// Result type alias for port-randomizer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during port selection and port enumeration.
#[derive(Error, Debug)]
pub enum Error {
    /// The socket-enumeration utility could not be started or exited non-zero.
    #[error("Enumeration failed: {0}")]
    Enumeration(String),

    /// The selector gave up after exhausting its attempt cap.
    #[error("No available port found after {attempts} attempts")]
    NoPortAvailable { attempts: u32 },

    /// Failed to parse a value such as a protocol name.
    #[error("Failed to parse value: {0}")]
    ParseError(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Platform not supported.
    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),
}
