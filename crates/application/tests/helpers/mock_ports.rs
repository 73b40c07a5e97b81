#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use zonewatch_application::ports::{
    ArchiveStore, NameserverLookup, ReportWriter, TldCacheStore, TldListFetcher,
    VersionControlPublisher, ZoneTransferClient,
};
use zonewatch_domain::{archive_relative_path, Domain, DomainError, Nameserver, TldNameserverMap};

// ============================================================================
// Mock NameserverLookup
// ============================================================================

pub struct MockNameserverLookup {
    responses: Arc<RwLock<HashMap<String, Result<Vec<Nameserver>, DomainError>>>>,
    call_count: Arc<AtomicU64>,
}

impl MockNameserverLookup {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set_nameservers(&self, domain: &str, nameservers: &[&str]) {
        self.responses.write().await.insert(
            domain.to_string(),
            Ok(nameservers.iter().map(|ns| Nameserver::new(ns)).collect()),
        );
    }

    pub async fn set_error(&self, domain: &str, error: DomainError) {
        self.responses
            .write()
            .await
            .insert(domain.to_string(), Err(error));
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl NameserverLookup for MockNameserverLookup {
    async fn lookup_ns(&self, domain: &Domain) -> Result<Vec<Nameserver>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.responses
            .read()
            .await
            .get(domain.as_str())
            .cloned()
            .unwrap_or_else(|| Err(DomainError::NxDomain(domain.to_string())))
    }
}

// ============================================================================
// Mock ZoneTransferClient
// ============================================================================

pub struct MockZoneTransferClient {
    outputs: Arc<RwLock<HashMap<(String, String), String>>>,
    default_output: String,
    calls: Arc<RwLock<Vec<(String, String)>>>,
}

impl MockZoneTransferClient {
    /// Unknown pairs answer with "Transfer failed."
    pub fn new() -> Self {
        Self {
            outputs: Arc::new(RwLock::new(HashMap::new())),
            default_output: "; Transfer failed.".to_string(),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn set_output(&self, domain: &str, nameserver: &str, output: &str) {
        self.outputs.write().await.insert(
            (domain.to_string(), nameserver.to_string()),
            output.to_string(),
        );
    }

    pub async fn calls(&self) -> Vec<(String, String)> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl ZoneTransferClient for MockZoneTransferClient {
    async fn probe(&self, domain: &Domain, nameserver: &Nameserver) -> String {
        let key = (domain.to_string(), nameserver.to_string());
        self.calls.write().await.push(key.clone());
        self.outputs
            .read()
            .await
            .get(&key)
            .cloned()
            .unwrap_or_else(|| self.default_output.clone())
    }
}

// ============================================================================
// In-memory ArchiveStore
// ============================================================================

pub struct InMemoryArchiveStore {
    files: Arc<RwLock<HashMap<String, String>>>,
    write_count: Arc<AtomicU64>,
    should_fail: Arc<RwLock<bool>>,
}

impl InMemoryArchiveStore {
    pub fn new() -> Self {
        Self {
            files: Arc::new(RwLock::new(HashMap::new())),
            write_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn get(&self, path: &str) -> Option<String> {
        self.files.read().await.get(path).cloned()
    }

    pub async fn file_count(&self) -> usize {
        self.files.read().await.len()
    }

    pub fn write_count(&self) -> u64 {
        self.write_count.load(Ordering::Relaxed)
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl ArchiveStore for InMemoryArchiveStore {
    async fn write(
        &self,
        domain: &Domain,
        nameserver: &Nameserver,
        content: &str,
    ) -> Result<(), DomainError> {
        self.write_count.fetch_add(1, Ordering::Relaxed);
        if *self.should_fail.read().await {
            return Err(DomainError::IoError("disk full".to_string()));
        }
        self.files
            .write()
            .await
            .insert(archive_relative_path(domain, nameserver), content.to_string());
        Ok(())
    }
}

// ============================================================================
// TLD list fetcher and cache store
// ============================================================================

pub struct MockTldListFetcher {
    body: Arc<RwLock<Option<String>>>,
    call_count: Arc<AtomicU64>,
}

impl MockTldListFetcher {
    pub fn with_body(body: &str) -> Self {
        Self {
            body: Arc::new(RwLock::new(Some(body.to_string()))),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Every fetch fails as if the network were down.
    pub fn failing() -> Self {
        Self {
            body: Arc::new(RwLock::new(None)),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl TldListFetcher for MockTldListFetcher {
    async fn fetch_tld_list(&self) -> Result<String, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.body
            .read()
            .await
            .clone()
            .ok_or_else(|| DomainError::TldSource("connection reset".to_string()))
    }
}

pub struct InMemoryTldCacheStore {
    map: Arc<RwLock<Option<TldNameserverMap>>>,
    save_count: Arc<AtomicU64>,
}

impl InMemoryTldCacheStore {
    pub fn new() -> Self {
        Self {
            map: Arc::new(RwLock::new(None)),
            save_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_map(map: TldNameserverMap) -> Self {
        Self {
            map: Arc::new(RwLock::new(Some(map))),
            save_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn stored(&self) -> Option<TldNameserverMap> {
        self.map.read().await.clone()
    }

    pub fn save_count(&self) -> u64 {
        self.save_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl TldCacheStore for InMemoryTldCacheStore {
    async fn load(&self) -> Result<TldNameserverMap, DomainError> {
        self.map
            .read()
            .await
            .clone()
            .ok_or_else(|| DomainError::TldCache("cache/tld_dict.json not found".to_string()))
    }

    async fn save(&self, map: &TldNameserverMap) -> Result<(), DomainError> {
        self.save_count.fetch_add(1, Ordering::Relaxed);
        *self.map.write().await = Some(map.clone());
        Ok(())
    }
}

// ============================================================================
// Report writer and publisher
// ============================================================================

pub struct InMemoryReportWriter {
    last: Arc<RwLock<Option<String>>>,
    write_count: Arc<AtomicU64>,
}

impl InMemoryReportWriter {
    pub fn new() -> Self {
        Self {
            last: Arc::new(RwLock::new(None)),
            write_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn last_report(&self) -> Option<String> {
        self.last.read().await.clone()
    }

    pub fn write_count(&self) -> u64 {
        self.write_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ReportWriter for InMemoryReportWriter {
    async fn write_report(&self, markdown: &str) -> Result<(), DomainError> {
        self.write_count.fetch_add(1, Ordering::Relaxed);
        *self.last.write().await = Some(markdown.to_string());
        Ok(())
    }
}

pub struct MockPublisher {
    call_count: Arc<AtomicU64>,
    should_fail: bool,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self {
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: true,
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl VersionControlPublisher for MockPublisher {
    async fn publish(&self) -> Result<(), DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if self.should_fail {
            return Err(DomainError::Publish("git push exited with status 128".to_string()));
        }
        Ok(())
    }
}
