use async_trait::async_trait;
use zonewatch_domain::DomainError;

/// Publishes the archive tree and report (stage, commit, push).
#[async_trait]
pub trait VersionControlPublisher: Send + Sync {
    async fn publish(&self) -> Result<(), DomainError>;
}
