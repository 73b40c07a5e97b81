use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use zonewatch_application::ports::{
    ArchiveStore, NameserverLookup, ReportWriter, TldCacheStore, TldListFetcher,
    ZoneTransferClient,
};
use zonewatch_application::services::{NameserverCache, NameserverResolver, TldSource};
use zonewatch_application::use_cases::{ProbeTransferUseCase, RunSweepUseCase};
use zonewatch_domain::{Domain, DomainError, Nameserver, TldNameserverMap};

// ============================================================================
// Port stubs
// ============================================================================

/// Every domain resolves to a single nameserver.
pub struct SingleNameserverLookup;

#[async_trait]
impl NameserverLookup for SingleNameserverLookup {
    async fn lookup_ns(&self, domain: &Domain) -> Result<Vec<Nameserver>, DomainError> {
        Ok(vec![Nameserver::new(format!("ns.{}", domain.as_str()))])
    }
}

/// Answers every probe after an optional delay.
pub struct SlowTransferClient {
    delay: Duration,
    calls: AtomicU64,
}

impl SlowTransferClient {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicU64::new(0),
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ZoneTransferClient for SlowTransferClient {
    async fn probe(&self, _domain: &Domain, _nameserver: &Nameserver) -> String {
        self.calls.fetch_add(1, Ordering::Relaxed);
        tokio::time::sleep(self.delay).await;
        "; Transfer failed.".to_string()
    }
}

pub struct NullArchiveStore;

#[async_trait]
impl ArchiveStore for NullArchiveStore {
    async fn write(
        &self,
        _domain: &Domain,
        _nameserver: &Nameserver,
        _content: &str,
    ) -> Result<(), DomainError> {
        Ok(())
    }
}

pub struct CountingFetcher {
    body: Option<String>,
    calls: AtomicU64,
}

impl CountingFetcher {
    pub fn with_body(body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            calls: AtomicU64::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            body: None,
            calls: AtomicU64::new(0),
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl TldListFetcher for CountingFetcher {
    async fn fetch_tld_list(&self) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.body
            .clone()
            .ok_or_else(|| DomainError::TldSource("connection reset".to_string()))
    }
}

pub struct EmptyTldCache;

#[async_trait]
impl TldCacheStore for EmptyTldCache {
    async fn load(&self) -> Result<TldNameserverMap, DomainError> {
        Ok(TldNameserverMap::new())
    }

    async fn save(&self, _map: &TldNameserverMap) -> Result<(), DomainError> {
        Ok(())
    }
}

pub struct CountingReportWriter {
    writes: AtomicU64,
}

impl CountingReportWriter {
    pub fn new() -> Self {
        Self {
            writes: AtomicU64::new(0),
        }
    }

    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ReportWriter for CountingReportWriter {
    async fn write_report(&self, _markdown: &str) -> Result<(), DomainError> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

// ============================================================================
// Sweep wiring
// ============================================================================

pub struct SweepParts {
    pub sweep: Arc<RunSweepUseCase>,
    pub fetcher: Arc<CountingFetcher>,
    pub client: Arc<SlowTransferClient>,
    pub report: Arc<CountingReportWriter>,
}

pub fn build_sweep(fetcher: CountingFetcher, probe_delay: Duration) -> SweepParts {
    let fetcher = Arc::new(fetcher);
    let client = Arc::new(SlowTransferClient::new(probe_delay));
    let report = Arc::new(CountingReportWriter::new());

    let resolver = Arc::new(NameserverResolver::new(
        Arc::new(SingleNameserverLookup),
        Arc::new(NameserverCache::new()),
    ));
    let tld_source = Arc::new(
        TldSource::new(fetcher.clone(), Arc::new(EmptyTldCache), resolver.clone())
            .with_persistence(false),
    );
    let probe = Arc::new(ProbeTransferUseCase::new(
        client.clone(),
        Arc::new(NullArchiveStore),
    ));

    let sweep = Arc::new(RunSweepUseCase::new(
        vec![Nameserver::new("a.root-servers.net.")],
        tld_source,
        resolver,
        probe,
        report.clone(),
    ));

    SweepParts {
        sweep,
        fetcher,
        client,
        report,
    }
}
