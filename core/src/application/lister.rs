//! Used-port listing service.

use tracing::debug;

use crate::domain::{interleave, parse_used_ports, ColumnRow, Protocol};
use crate::error::Result;
use crate::ports::PortEnumerator;

/// Application service for listing ports in use.
///
/// It uses the `PortEnumerator` trait for the raw socket listing,
/// allowing different implementations to be injected.
pub struct UsageLister<E: PortEnumerator> {
    enumerator: E,
}

impl<E: PortEnumerator> UsageLister<E> {
    /// Create a new lister with the given enumerator.
    pub fn new(enumerator: E) -> Self {
        Self { enumerator }
    }

    /// List local ports bound with `protocol`, in the order the enumerator
    /// reported them.
    pub async fn list_used_ports(&self, protocol: Protocol) -> Result<Vec<u16>> {
        let output = self.enumerator.enumerate().await?;
        let ports = parse_used_ports(&output, protocol);
        debug!(protocol = %protocol, count = ports.len(), "Listed used ports");
        Ok(ports)
    }

    /// List TCP and UDP ports side by side.
    ///
    /// Each protocol is enumerated on its own; the shorter column is padded
    /// with `None`.
    pub async fn list_all(&self) -> Result<Vec<ColumnRow>> {
        let tcp = self.list_used_ports(Protocol::Tcp).await?;
        let udp = self.list_used_ports(Protocol::Udp).await?;
        Ok(interleave(&tcp, &udp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::error::Error;

    const SAMPLE: &str = "\
tcp   LISTEN 0 128 127.0.0.1:8080 0.0.0.0:*
udp   UNCONN 0 0   0.0.0.0:53    0.0.0.0:*
tcp   LISTEN 0 5   0.0.0.0:22    0.0.0.0:*";

    /// Mock enumerator for testing.
    struct MockEnumerator {
        output: Option<String>,
        calls: AtomicUsize,
    }

    impl MockEnumerator {
        fn new(output: &str) -> Self {
            Self {
                output: Some(output.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                output: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl PortEnumerator for MockEnumerator {
        async fn enumerate(&self) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.output
                .clone()
                .ok_or_else(|| Error::Enumeration("ss exited with exit status: 1".to_string()))
        }
    }

    #[tokio::test]
    async fn test_list_used_ports() {
        let lister = UsageLister::new(MockEnumerator::new(SAMPLE));

        assert_eq!(lister.list_used_ports(Protocol::Tcp).await.unwrap(), vec![8080, 22]);
        assert_eq!(lister.list_used_ports(Protocol::Udp).await.unwrap(), vec![53]);
    }

    #[tokio::test]
    async fn test_enumeration_failure_is_propagated() {
        let lister = UsageLister::new(MockEnumerator::failing());

        assert!(matches!(
            lister.list_used_ports(Protocol::Tcp).await,
            Err(Error::Enumeration(_))
        ));
        assert!(lister.list_all().await.is_err());
    }

    #[tokio::test]
    async fn test_list_all_enumerates_each_protocol() {
        let lister = UsageLister::new(MockEnumerator::new(SAMPLE));

        let rows = lister.list_all().await.unwrap();
        assert_eq!(
            rows,
            vec![
                ColumnRow {
                    tcp: Some(8080),
                    udp: Some(53)
                },
                ColumnRow {
                    tcp: Some(22),
                    udp: None
                },
            ]
        );
        assert_eq!(lister.enumerator.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_empty_output() {
        let lister = UsageLister::new(MockEnumerator::new(""));

        assert!(lister.list_used_ports(Protocol::Udp).await.unwrap().is_empty());
        assert!(lister.list_all().await.unwrap().is_empty());
    }
}
