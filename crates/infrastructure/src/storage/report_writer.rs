use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;
use zonewatch_application::ports::ReportWriter;
use zonewatch_domain::DomainError;

pub struct FsReportWriter {
    path: PathBuf,
}

impl FsReportWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ReportWriter for FsReportWriter {
    async fn write_report(&self, markdown: &str) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::IoError(format!("{}: {}", parent.display(), e)))?;
        }

        fs::write(&self.path, markdown)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", self.path.display(), e)))?;

        info!(path = %self.path.display(), "Report written");
        Ok(())
    }
}
