#![allow(dead_code)]

use super::mock_ports::*;
use std::sync::Arc;
use zonewatch_application::services::{NameserverCache, NameserverResolver, TldSource};
use zonewatch_application::use_cases::{ProbeTransferUseCase, RunSweepUseCase};
use zonewatch_domain::Nameserver;

/// Fully wired sweep over mock collaborators.
pub struct SweepFixture {
    pub lookup: Arc<MockNameserverLookup>,
    pub transfer: Arc<MockZoneTransferClient>,
    pub archive: Arc<InMemoryArchiveStore>,
    pub fetcher: Arc<MockTldListFetcher>,
    pub tld_cache: Arc<InMemoryTldCacheStore>,
    pub report: Arc<InMemoryReportWriter>,
    pub cache: Arc<NameserverCache>,
    pub resolver: Arc<NameserverResolver>,
    pub tld_source: Arc<TldSource>,
    pub probe: Arc<ProbeTransferUseCase>,
}

impl SweepFixture {
    pub fn new(tld_body: &str) -> Self {
        Self::with_fetcher(MockTldListFetcher::with_body(tld_body))
    }

    pub fn with_fetcher(fetcher: MockTldListFetcher) -> Self {
        let lookup = Arc::new(MockNameserverLookup::new());
        let transfer = Arc::new(MockZoneTransferClient::new());
        let archive = Arc::new(InMemoryArchiveStore::new());
        let fetcher = Arc::new(fetcher);
        let tld_cache = Arc::new(InMemoryTldCacheStore::new());
        let report = Arc::new(InMemoryReportWriter::new());

        let cache = Arc::new(NameserverCache::new());
        let resolver = Arc::new(NameserverResolver::new(lookup.clone(), cache.clone()));
        let tld_source = Arc::new(
            TldSource::new(fetcher.clone(), tld_cache.clone(), resolver.clone())
                .with_persistence(false),
        );
        let probe = Arc::new(ProbeTransferUseCase::new(transfer.clone(), archive.clone()));

        Self {
            lookup,
            transfer,
            archive,
            fetcher,
            tld_cache,
            report,
            cache,
            resolver,
            tld_source,
            probe,
        }
    }

    pub fn sweep(&self, roots: &[&str]) -> RunSweepUseCase {
        RunSweepUseCase::new(
            roots.iter().map(|ns| Nameserver::new(ns)).collect(),
            self.tld_source.clone(),
            self.resolver.clone(),
            self.probe.clone(),
            self.report.clone(),
        )
    }
}
