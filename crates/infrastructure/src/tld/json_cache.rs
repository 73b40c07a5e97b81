use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use zonewatch_application::ports::TldCacheStore;
use zonewatch_domain::{DomainError, TldNameserverMap};

/// TLD → nameserver map stored as a JSON object (`cache/tld_dict.json`).
pub struct JsonTldCacheStore {
    path: PathBuf,
}

impl JsonTldCacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TldCacheStore for JsonTldCacheStore {
    async fn load(&self) -> Result<TldNameserverMap, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                DomainError::TldCache(format!("{} not found", self.path.display()))
            }
            _ => DomainError::TldCache(format!("failed to read {}: {}", self.path.display(), e)),
        })?;

        serde_json::from_str(&content).map_err(|e| {
            DomainError::TldCache(format!("invalid JSON in {}: {}", self.path.display(), e))
        })
    }

    async fn save(&self, map: &TldNameserverMap) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::IoError(format!("{}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string(map)
            .map_err(|e| DomainError::TldCache(format!("failed to encode TLD map: {}", e)))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.path.display(), e)))?;

        debug!(path = %self.path.display(), entries = map.len(), "TLD cache saved");
        Ok(())
    }
}
