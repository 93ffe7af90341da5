//! Network reachability checks run before each page request.

use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time::timeout;
use url::Url;

use crate::app::{PracticeFeedError, Result};

#[async_trait]
pub trait ConnectivityProbe {
    async fn is_connected(&self) -> bool;
}

/// Reports the network as reachable when a TCP connection to `addr`
/// succeeds within the timeout.
pub struct TcpProbe {
    addr: String,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(addr: impl Into<String>, timeout: Duration) -> Self {
        Self {
            addr: addr.into(),
            timeout,
        }
    }

    /// Probe the host and port a base URL points at.
    pub fn for_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let url = Url::parse(base_url)?;
        let host = url
            .host_str()
            .ok_or_else(|| PracticeFeedError::Other(format!("No host in URL: {}", base_url)))?;
        let port = url
            .port_or_known_default()
            .ok_or_else(|| PracticeFeedError::Other(format!("No port for URL: {}", base_url)))?;
        Ok(Self::new(format!("{}:{}", host, port), timeout))
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }
}

#[async_trait]
impl ConnectivityProbe for TcpProbe {
    async fn is_connected(&self) -> bool {
        match timeout(self.timeout, TcpStream::connect(&self.addr)).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                tracing::debug!("Connectivity probe to {} failed: {}", self.addr, e);
                false
            }
            Err(_) => {
                tracing::debug!("Connectivity probe to {} timed out", self.addr);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::net::TcpListener;

    #[test]
    fn test_for_url_uses_default_ports() {
        let probe = TcpProbe::for_url("https://api.example.com/v1", Duration::from_secs(1)).unwrap();
        assert_eq!(probe.addr(), "api.example.com:443");

        let probe = TcpProbe::for_url("http://localhost:8080", Duration::from_secs(1)).unwrap();
        assert_eq!(probe.addr(), "localhost:8080");
    }

    #[test]
    fn test_for_url_rejects_invalid_url() {
        assert!(TcpProbe::for_url("::nope", Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn test_probe_reaches_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let probe = TcpProbe::new(addr.to_string(), Duration::from_secs(1));
        assert!(probe.is_connected().await);
    }

    #[tokio::test]
    async fn test_probe_fails_on_closed_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let probe = TcpProbe::new(addr.to_string(), Duration::from_secs(1));
        assert!(!probe.is_connected().await);
    }
}
