//! Parsing of socket-enumeration output and side-by-side listing rows.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::Protocol;

/// Minimum number of columns for a socket line to be considered.
const MIN_FIELDS: usize = 6;

/// Column holding the local `address:port`.
const LOCAL_ADDRESS_FIELD: usize = 4;

/// A local port bound with a given protocol, as read from enumeration output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UsedPortRecord {
    pub protocol: Protocol,
    pub port: u16,
}

/// One row of the TCP/UDP side-by-side listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnRow {
    pub tcp: Option<u16>,
    pub udp: Option<u16>,
}

/// Extract the port from a local `address:port` column.
///
/// Handles:
/// - IPv4: "127.0.0.1:3000" or "*:8080"
/// - IPv6: "\[::1]:3000" or "\[::]:22"
/// - Scoped: "127.0.0.53%lo:53"
fn local_port(address: &str) -> Option<u16> {
    let (_, port) = address.rsplit_once(':')?;
    port.parse().ok()
}

/// Parse one line of `ss -tuln` output.
///
/// Expected format:
/// ```text
/// Netid State  Recv-Q Send-Q Local Address:Port Peer Address:Port Process
/// tcp   LISTEN 0      128    127.0.0.1:8080     0.0.0.0:*
/// ```
fn parse_line(line: &str) -> Option<UsedPortRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let protocol = match fields[0] {
        "tcp" => Protocol::Tcp,
        "udp" => Protocol::Udp,
        _ => return None,
    };

    match local_port(fields[LOCAL_ADDRESS_FIELD]) {
        Some(port) => Some(UsedPortRecord { protocol, port }),
        None => {
            trace!(line = line, "Skipping line with malformed local address");
            None
        }
    }
}

/// Parse every TCP and UDP record, in the order encountered.
pub fn parse_records(output: &str) -> Vec<UsedPortRecord> {
    output.lines().filter_map(parse_line).collect()
}

/// Parse the local ports bound with `protocol`, in the order encountered.
///
/// Results are neither sorted nor deduplicated. Lines with fewer than six
/// fields, another protocol tag, or an unparsable local port are skipped.
pub fn parse_used_ports(output: &str, protocol: Protocol) -> Vec<u16> {
    parse_records(output)
        .into_iter()
        .filter(|record| record.protocol == protocol)
        .map(|record| record.port)
        .collect()
}

/// Pair two port lists row by row, padding the shorter one with `None`.
pub fn interleave(tcp: &[u16], udp: &[u16]) -> Vec<ColumnRow> {
    let rows = tcp.len().max(udp.len());
    (0..rows)
        .map(|i| ColumnRow {
            tcp: tcp.get(i).copied(),
            udp: udp.get(i).copied(),
        })
        .collect()
}
