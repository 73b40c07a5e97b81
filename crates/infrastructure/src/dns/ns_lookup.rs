use super::forwarding::{MessageBuilder, NsResponse, ResponseParser};
use super::transport::{tcp::TcpTransport, udp::UdpTransport, Transport};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::debug;
use zonewatch_application::ports::NameserverLookup;
use zonewatch_domain::{Domain, DomainError, Nameserver};

/// NS lookup through recursive resolvers.
///
/// Servers are tried in order. A transport failure or a SERVFAIL / REFUSED
/// / NOTIMP answer moves on to the next server; NXDOMAIN and NOERROR answers
/// are final. Truncated UDP answers are retried over TCP.
pub struct HickoryNameserverLookup {
    servers: Vec<SocketAddr>,
    timeout: Duration,
}

impl HickoryNameserverLookup {
    pub fn new(servers: Vec<SocketAddr>, timeout: Duration) -> Self {
        Self { servers, timeout }
    }

    /// Parse `ip:port` strings, as found in `resolver.upstream_servers`.
    pub fn from_config(servers: &[String], timeout_ms: u64) -> Result<Self, DomainError> {
        let servers = servers
            .iter()
            .map(|s| {
                s.parse::<SocketAddr>().map_err(|e| DomainError::Transport {
                    server: s.clone(),
                    message: format!("invalid upstream address: {}", e),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(servers, Duration::from_millis(timeout_ms)))
    }

    async fn query_server(
        &self,
        server: SocketAddr,
        id: u16,
        query: &[u8],
    ) -> Result<NsResponse, DomainError> {
        let mut transport = Transport::Udp(UdpTransport::new(server));

        loop {
            let raw = transport.send(query, self.timeout).await?;
            let response = ResponseParser::parse(&raw.bytes)?;

            if response.id != id {
                return Err(DomainError::InvalidDnsResponse(format!(
                    "response id {} does not match query id {} from {}",
                    response.id, id, server
                )));
            }

            if response.truncated && matches!(transport, Transport::Udp(_)) {
                debug!(server = %server, "Truncated UDP answer, retrying over TCP");
                transport = Transport::Tcp(TcpTransport::new(server));
                continue;
            }

            debug!(
                server = %server,
                protocol = transport.protocol_name(),
                rcode = ResponseParser::rcode_to_status(response.rcode),
                "NS answer received"
            );
            return Ok(response);
        }
    }

    fn interpret(domain: &Domain, response: NsResponse) -> Result<Vec<Nameserver>, DomainError> {
        if response.is_nxdomain() {
            return Err(DomainError::NxDomain(domain.to_string()));
        }
        if response.nameservers.is_empty() {
            return Err(DomainError::NoAnswer(domain.to_string()));
        }
        Ok(response.nameservers)
    }
}

#[async_trait]
impl NameserverLookup for HickoryNameserverLookup {
    async fn lookup_ns(&self, domain: &Domain) -> Result<Vec<Nameserver>, DomainError> {
        let (id, query) = MessageBuilder::build_ns_query(domain.as_str())?;

        let mut last_error = DomainError::NoNameservers(domain.to_string());

        for server in &self.servers {
            match self.query_server(*server, id, &query).await {
                Ok(response) if response.is_server_error() => {
                    debug!(
                        domain = %domain,
                        server = %server,
                        rcode = ResponseParser::rcode_to_status(response.rcode),
                        "Upstream could not answer, trying next"
                    );
                    last_error = DomainError::NoNameservers(domain.to_string());
                }
                Ok(response) => return Self::interpret(domain, response),
                Err(e) => {
                    debug!(domain = %domain, server = %server, error = %e, "NS query failed");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
