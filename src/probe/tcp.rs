//! Generic TCP reachability probe.
//!
//! Fallback strategy when no database credentials are configured: a bare
//! socket connect only proves the dependency is network-reachable.

use tokio::net::TcpStream;

use crate::probe::ProbeError;

pub struct TcpProbe {
    address: String,
}

impl TcpProbe {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            address: format!("{host}:{port}"),
        }
    }

    pub fn target(&self) -> String {
        self.address.clone()
    }

    pub async fn check(&self) -> Result<(), ProbeError> {
        TcpStream::connect(&self.address)
            .await
            .map(|_| ())
            .map_err(|e| ProbeError::Connect(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn refused_connection_is_a_connect_error() {
        let probe = TcpProbe::new("127.0.0.1", 1);
        assert!(matches!(probe.check().await, Err(ProbeError::Connect(_))));
    }

    #[tokio::test]
    async fn open_port_probes_ready() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let probe = TcpProbe::new("127.0.0.1", port);
        assert!(probe.check().await.is_ok());
    }
}
