use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("NXDOMAIN: {0} does not exist")]
    NxDomain(String),

    #[error("No nameservers returned for {0}")]
    NoNameservers(String),

    #[error("No answer for {0}")]
    NoAnswer(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Transport error talking to {server}: {message}")]
    Transport { server: String, message: String },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("TLD source unavailable: {0}")]
    TldSource(String),

    #[error("TLD cache error: {0}")]
    TldCache(String),

    #[error("Publish failed: {0}")]
    Publish(String),
}

impl DomainError {
    /// Resolution errors are recovered locally by the resolver.
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDomainName(_)
                | DomainError::NxDomain(_)
                | DomainError::NoNameservers(_)
                | DomainError::NoAnswer(_)
                | DomainError::QueryTimeout
                | DomainError::InvalidDnsResponse(_)
                | DomainError::Transport { .. }
        )
    }
}
