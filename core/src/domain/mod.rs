//! Domain layer - Pure business logic and data models.
//!
//! This module contains domain entities that represent core business concepts.
//! These types have no I/O dependencies and can be tested in isolation.

mod listing;
mod protocol;
mod well_known;

// Re-export all domain types
pub use listing::{interleave, parse_records, parse_used_ports, ColumnRow, UsedPortRecord};
pub use protocol::Protocol;
pub use well_known::{is_well_known, DYNAMIC_PORT_MAX, DYNAMIC_PORT_MIN, WELL_KNOWN_PORTS};
