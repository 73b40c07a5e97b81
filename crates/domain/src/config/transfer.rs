use serde::{Deserialize, Serialize};

/// Zone transfer prober settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransferConfig {
    /// Path to the `dig` executable
    #[serde(default = "default_dig_path")]
    pub dig_path: String,

    /// Per-attempt timeout handed to `dig +time=`
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Failure wording appended to the built-in signatures
    #[serde(default)]
    pub extra_failure_signatures: Vec<String>,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            dig_path: default_dig_path(),
            timeout_secs: default_timeout_secs(),
            extra_failure_signatures: vec![],
        }
    }
}

fn default_dig_path() -> String {
    "dig".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}
