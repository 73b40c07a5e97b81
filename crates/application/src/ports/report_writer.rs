use async_trait::async_trait;
use zonewatch_domain::DomainError;

#[async_trait]
pub trait ReportWriter: Send + Sync {
    /// Replace the report document with `markdown`.
    async fn write_report(&self, markdown: &str) -> Result<(), DomainError>;
}
