use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory under which `archives/` is created
    #[serde(default = "default_archive_dir")]
    pub archive_dir: String,

    /// Markdown report, overwritten every sweep
    #[serde(default = "default_report_path")]
    pub report_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            archive_dir: default_archive_dir(),
            report_path: default_report_path(),
        }
    }
}

fn default_archive_dir() -> String {
    ".".to_string()
}

fn default_report_path() -> String {
    "transferable_zones.md".to_string()
}
