use async_trait::async_trait;
use zonewatch_domain::{Domain, DomainError, Nameserver};

/// Persists raw transfer output, one artifact per (domain, nameserver) pair.
///
/// Writes overwrite any previous content for the same pair.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    async fn write(
        &self,
        domain: &Domain,
        nameserver: &Nameserver,
        content: &str,
    ) -> Result<(), DomainError>;
}
