use async_trait::async_trait;
use zonewatch_domain::{Domain, DomainError, Nameserver};

/// DNS query capability used to enumerate a zone's authoritative servers.
///
/// Implementations return the NS targets in answer order, duplicates
/// included, and map "no such domain", "no answer" and timeouts to the
/// matching `DomainError` variants.
#[async_trait]
pub trait NameserverLookup: Send + Sync {
    async fn lookup_ns(&self, domain: &Domain) -> Result<Vec<Nameserver>, DomainError>;
}
