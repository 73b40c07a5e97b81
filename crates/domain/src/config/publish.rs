use serde::{Deserialize, Serialize};

/// Publishing of archives and report to a git remote after each sweep
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PublishConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_git_path")]
    pub git_path: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Repository working directory the git commands run in
    #[serde(default = "default_workdir")]
    pub workdir: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            git_path: default_git_path(),
            commit_message: default_commit_message(),
            workdir: default_workdir(),
        }
    }
}

fn default_git_path() -> String {
    "git".to_string()
}

fn default_commit_message() -> String {
    "Updating zone information".to_string()
}

fn default_workdir() -> String {
    ".".to_string()
}
