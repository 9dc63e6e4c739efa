//! Linux socket enumeration using ss.

use super::CommandEnumerator;

/// Enumerate listening sockets with `ss -tuln`.
///
/// Flags explained:
/// -t, --tcp           display TCP sockets
/// -u, --udp           display UDP sockets
/// -l, --listening     display listening sockets
/// -n, --numeric       don't resolve service names
pub fn ss() -> CommandEnumerator {
    CommandEnumerator::new("ss", ["-tuln"])
}
