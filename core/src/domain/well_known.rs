//! Reserved port table and the dynamic/private range.

/// Lowest port eligible for random selection.
pub const DYNAMIC_PORT_MIN: u16 = 1024;

/// Highest port eligible for random selection.
pub const DYNAMIC_PORT_MAX: u16 = 65535;

/// Ports reserved for common services. Never handed out by the selector,
/// even when bindable.
pub const WELL_KNOWN_PORTS: &[u16] = &[
    // System ports
    7, 9, 13, 17, 19, 20, 21, 22, 23, 25, 37, 43, 49, 53, 67, 68, 69, 70, 79, 80, 88, 102,
    110, 111, 113, 119, 123, 135, 137, 138, 139, 143, 161, 162, 179, 194, 201, 389, 427, 443,
    445, 464, 465, 500, 512, 513, 514, 515, 520, 521, 543, 544, 548, 554, 563, 587, 623, 631,
    636, 639, 646, 691, 853, 860, 873, 902, 989, 990, 993, 995,
    // Registered services
    1080, 1194, 1433, 1434, 1521, 1701, 1723, 1812, 1813, 1883, 1900, 2049, 2082, 2083, 2181,
    2375, 2376, 2379, 2380, 3268, 3269, 3306, 3389, 3478, 3690, 4369, 4789, 5060, 5061, 5222,
    5353, 5432, 5672, 5900, 5984, 6379, 6443, 6667, 8000, 8008, 8080, 8086, 8443, 8888, 9000,
    9042, 9090, 9092, 9200, 9300, 9418, 11211, 15672, 27017, 50000,
];

/// Check whether a port is in the reserved table.
pub fn is_well_known(port: u16) -> bool {
    WELL_KNOWN_PORTS.contains(&port)
}
