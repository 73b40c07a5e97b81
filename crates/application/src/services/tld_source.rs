use crate::ports::{TldCacheStore, TldListFetcher};
use crate::services::NameserverResolver;
use std::sync::Arc;
use tracing::{info, warn};
use zonewatch_domain::{parse_tld_list, Domain, DomainError, TldNameserverMap};

/// Supplies the TLDs to sweep, from IANA or from the local cache file.
pub struct TldSource {
    fetcher: Arc<dyn TldListFetcher>,
    cache_store: Arc<dyn TldCacheStore>,
    resolver: Arc<NameserverResolver>,
    persist: bool,
}

impl TldSource {
    pub fn new(
        fetcher: Arc<dyn TldListFetcher>,
        cache_store: Arc<dyn TldCacheStore>,
        resolver: Arc<NameserverResolver>,
    ) -> Self {
        Self {
            fetcher,
            cache_store,
            resolver,
            persist: true,
        }
    }

    /// Write the TLD → nameserver map after every remote refresh.
    pub fn with_persistence(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    /// Lower-cased TLD labels in list order.
    ///
    /// Any failure is returned to the caller: an empty list would silently
    /// skip the whole sweep.
    pub async fn list_tlds(&self, from_cache: bool) -> Result<Vec<String>, DomainError> {
        if from_cache {
            return self.list_from_cache().await;
        }

        info!("Grabbing IANA's list of TLDs");
        let body = self.fetcher.fetch_tld_list().await?;
        let tlds = parse_tld_list(&body);
        if tlds.is_empty() {
            return Err(DomainError::TldSource(
                "TLD list contained no entries".to_string(),
            ));
        }
        info!(count = tlds.len(), "TLD list fetched");

        if self.persist {
            self.persist_map(&tlds).await;
        }

        Ok(tlds)
    }

    async fn list_from_cache(&self) -> Result<Vec<String>, DomainError> {
        let map = self.cache_store.load().await?;
        if map.is_empty() {
            return Err(DomainError::TldCache("cached TLD map is empty".to_string()));
        }

        let seeded = self.resolver.cache().seed(&map);
        info!(count = map.len(), seeded, "TLD list loaded from cache");

        Ok(map.into_keys().collect())
    }

    async fn persist_map(&self, tlds: &[String]) {
        let mut map = TldNameserverMap::new();
        for tld in tlds {
            let nameservers = match Domain::from_tld(tld) {
                Ok(domain) => self
                    .resolver
                    .resolve(&domain)
                    .await
                    .iter()
                    .map(|ns| ns.to_string())
                    .collect(),
                Err(_) => Vec::new(),
            };
            map.insert(tld.clone(), nameservers);
        }

        match self.cache_store.save(&map).await {
            Ok(()) => info!(count = map.len(), "TLD cache written"),
            Err(e) => warn!(error = %e, "Failed to write TLD cache"),
        }
    }
}
