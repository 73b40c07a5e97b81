use crate::ports::NameserverLookup;
use crate::services::NameserverCache;
use std::sync::{Arc, LazyLock};
use tracing::{debug, error, warn};
use zonewatch_domain::{Domain, DomainError, Nameserver};

static NO_NAMESERVERS: LazyLock<Arc<Vec<Nameserver>>> = LazyLock::new(|| Arc::new(Vec::new()));

/// Enumerates every authoritative nameserver of a domain.
///
/// All advertised servers are returned, not just one: a single misconfigured
/// secondary is enough to leak the zone, so each one gets probed.
pub struct NameserverResolver {
    lookup: Arc<dyn NameserverLookup>,
    cache: Arc<NameserverCache>,
}

impl NameserverResolver {
    pub fn new(lookup: Arc<dyn NameserverLookup>, cache: Arc<NameserverCache>) -> Self {
        Self { lookup, cache }
    }

    pub fn cache(&self) -> &Arc<NameserverCache> {
        &self.cache
    }

    /// Never fails. Resolution problems are logged and yield an empty list,
    /// which is not cached.
    pub async fn resolve(&self, domain: &Domain) -> Arc<Vec<Nameserver>> {
        debug!(domain = %domain, "Grabbing nameserver list");

        if let Some(cached) = self.cache.get(domain) {
            debug!(domain = %domain, nameservers = cached.len(), "Nameserver cache hit");
            return cached;
        }

        match self.lookup.lookup_ns(domain).await {
            Ok(nameservers) if nameservers.is_empty() => {
                warn!(domain = %domain, "No answer");
                Arc::clone(&NO_NAMESERVERS)
            }
            Ok(nameservers) => {
                let list = Arc::new(nameservers);
                self.cache.put(domain.clone(), Arc::clone(&list));
                debug!(domain = %domain, nameservers = list.len(), "Nameservers resolved");
                list
            }
            Err(e) => {
                Self::report_failure(domain, &e);
                Arc::clone(&NO_NAMESERVERS)
            }
        }
    }

    fn report_failure(domain: &Domain, error: &DomainError) {
        match error {
            DomainError::NxDomain(_) => {
                error!(domain = %domain, "NXDOMAIN - domain name doesn't exist")
            }
            DomainError::NoNameservers(_) => {
                error!(domain = %domain, "No nameservers returned")
            }
            DomainError::QueryTimeout => {
                error!(domain = %domain, "Nameserver request timed out")
            }
            DomainError::NoAnswer(_) => error!(domain = %domain, "No answer"),
            DomainError::InvalidDomainName(reason) => {
                warn!(domain = %domain, reason = %reason, "Skipping malformed domain")
            }
            other => error!(domain = %domain, error = %other, "Nameserver lookup failed"),
        }
    }
}
