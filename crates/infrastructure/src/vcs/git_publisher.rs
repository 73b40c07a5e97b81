use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, info, warn};
use zonewatch_application::ports::VersionControlPublisher;
use zonewatch_domain::DomainError;

/// Stages, commits and pushes the working tree with the `git` executable.
///
/// Every step runs even if an earlier one failed. Failures are collected
/// into one error.
pub struct GitPublisher {
    git_path: String,
    workdir: PathBuf,
    commit_message: String,
}

impl GitPublisher {
    pub fn new(
        git_path: impl Into<String>,
        workdir: impl Into<PathBuf>,
        commit_message: impl Into<String>,
    ) -> Self {
        Self {
            git_path: git_path.into(),
            workdir: workdir.into(),
            commit_message: commit_message.into(),
        }
    }

    pub fn steps(&self) -> Vec<(&'static str, Vec<String>)> {
        vec![
            ("Git adding...", vec!["add".to_string(), ".".to_string()]),
            (
                "Git committing...",
                vec![
                    "commit".to_string(),
                    "-m".to_string(),
                    self.commit_message.clone(),
                ],
            ),
            ("Git pushing...", vec!["push".to_string()]),
        ]
    }
}

#[async_trait]
impl VersionControlPublisher for GitPublisher {
    async fn publish(&self) -> Result<(), DomainError> {
        let mut failures = Vec::new();

        for (status, args) in self.steps() {
            info!("{}", status);

            let output = Command::new(&self.git_path)
                .args(&args)
                .current_dir(&self.workdir)
                .output()
                .await
                .map_err(|e| DomainError::Publish(format!("failed to run {}: {}", self.git_path, e)))?;

            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.trim().is_empty() {
                debug!(step = %args[0], output = %stdout.trim_end(), "git output");
            }

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                warn!(
                    step = %args[0],
                    status = %output.status,
                    stderr = %stderr.trim_end(),
                    "git step exited with failure"
                );
                failures.push(format!("git {} ({})", args[0], output.status));
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Publish(failures.join(", ")))
        }
    }
}
