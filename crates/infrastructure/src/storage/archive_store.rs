use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;
use zonewatch_application::ports::ArchiveStore;
use zonewatch_domain::{archive_relative_path, Domain, DomainError, Nameserver};

/// Archive tree on the local filesystem, rooted at `base_dir`.
pub struct FsArchiveStore {
    base_dir: PathBuf,
}

impl FsArchiveStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn path_for(&self, domain: &Domain, nameserver: &Nameserver) -> PathBuf {
        self.base_dir.join(archive_relative_path(domain, nameserver))
    }
}

#[async_trait]
impl ArchiveStore for FsArchiveStore {
    async fn write(
        &self,
        domain: &Domain,
        nameserver: &Nameserver,
        content: &str,
    ) -> Result<(), DomainError> {
        let path = self.path_for(domain, nameserver);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| DomainError::IoError(format!("{}: {}", dir.display(), e)))?;
        }

        fs::write(&path, content)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), bytes = content.len(), "Archive written");
        Ok(())
    }
}
