//! Port Randomizer Core Library
//!
//! Picks a random free port and reports the ports in use on the host.
//! Provides functionality to:
//! - Select a random available TCP or UDP port outside the well-known set
//! - Sample a well-known port for diagnostics
//! - List local ports bound per transport protocol
//! - Load and save user configuration
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure data models and output parsing
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: External system implementations
//! - `application`: Use case services
//!
//! # Platform Support
//! - Linux: Uses the `ss` command
//! - Other platforms: the enumeration command must be configured explicitly

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-export domain types (primary API)
pub use domain::{
    interleave, is_well_known, parse_records, parse_used_ports, ColumnRow, Protocol,
    UsedPortRecord, DYNAMIC_PORT_MAX, DYNAMIC_PORT_MIN, WELL_KNOWN_PORTS,
};

// Re-export other commonly used types
pub use adapters::{CommandEnumerator, SocketEnumerator, SocketProbe};
pub use application::{PortSelector, UsageLister};
pub use config::{AnimationConfig, Config, ConfigStore, EnumeratorConfig, SelectionPolicy};
pub use error::{Error, Result};
pub use ports::{AvailabilityProbe, PortEnumerator};
