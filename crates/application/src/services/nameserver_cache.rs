use dashmap::DashMap;
use std::sync::Arc;
use zonewatch_domain::{Domain, Nameserver, TldNameserverMap};

/// Memoized domain → authoritative nameservers.
///
/// Entries live for the lifetime of the cache, with no TTL or eviction.
#[derive(Debug, Default)]
pub struct NameserverCache {
    entries: DashMap<Domain, Arc<Vec<Nameserver>>>,
}

impl NameserverCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, domain: &Domain) -> Option<Arc<Vec<Nameserver>>> {
        self.entries.get(domain).map(|entry| Arc::clone(entry.value()))
    }

    pub fn put(&self, domain: Domain, nameservers: Arc<Vec<Nameserver>>) {
        self.entries.insert(domain, nameservers);
    }

    /// Load entries from a persisted TLD map. Empty lists are skipped so
    /// those TLDs are looked up again.
    pub fn seed(&self, map: &TldNameserverMap) -> usize {
        let mut seeded = 0;
        for (tld, nameservers) in map {
            if nameservers.is_empty() {
                continue;
            }
            let Ok(domain) = Domain::from_tld(tld) else {
                continue;
            };
            let list = nameservers.iter().map(Nameserver::new).collect();
            self.put(domain, Arc::new(list));
            seeded += 1;
        }
        seeded
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
