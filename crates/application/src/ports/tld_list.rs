use async_trait::async_trait;
use zonewatch_domain::{DomainError, TldNameserverMap};

/// Retrieves the raw canonical TLD list (one TLD per line, `#` comments).
#[async_trait]
pub trait TldListFetcher: Send + Sync {
    async fn fetch_tld_list(&self) -> Result<String, DomainError>;
}

/// Cross-run persisted TLD → nameserver map.
#[async_trait]
pub trait TldCacheStore: Send + Sync {
    async fn load(&self) -> Result<TldNameserverMap, DomainError>;

    async fn save(&self, map: &TldNameserverMap) -> Result<(), DomainError>;
}
