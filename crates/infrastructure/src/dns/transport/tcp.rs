use super::{io_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;
use zonewatch_domain::DomainError;

/// DNS over TCP (RFC 1035 §4.2.2, two-byte length prefix).
///
/// Used when a UDP answer comes back truncated.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let len = u16::try_from(message_bytes.len()).map_err(|_| {
            DomainError::InvalidDnsResponse(format!(
                "query of {} bytes does not fit a TCP frame",
                message_bytes.len()
            ))
        })?;

        let mut stream = TcpStream::connect(self.server_addr)
            .await
            .map_err(|e| io_error(self.server_addr, "connect", e))?;

        let mut frame = Vec::with_capacity(message_bytes.len() + 2);
        frame.extend_from_slice(&len.to_be_bytes());
        frame.extend_from_slice(message_bytes);
        stream
            .write_all(&frame)
            .await
            .map_err(|e| io_error(self.server_addr, "send TCP query", e))?;

        let mut len_buf = [0u8; 2];
        stream
            .read_exact(&mut len_buf)
            .await
            .map_err(|e| io_error(self.server_addr, "read TCP length", e))?;

        let mut response = vec![0u8; u16::from_be_bytes(len_buf) as usize];
        stream
            .read_exact(&mut response)
            .await
            .map_err(|e| io_error(self.server_addr, "read TCP response", e))?;

        Ok(response)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bytes = tokio::time::timeout(timeout, self.exchange(message_bytes))
            .await
            .map_err(|_| DomainError::QueryTimeout)??;

        debug!(server = %self.server_addr, bytes_received = bytes.len(), "TCP response received");

        Ok(TransportResponse {
            bytes,
            protocol_used: "TCP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}
