use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TldConfig {
    #[serde(default = "default_list_url")]
    pub list_url: String,

    /// JSON map of TLD → nameservers written on every remote refresh
    #[serde(default = "default_cache_path")]
    pub cache_path: String,

    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl Default for TldConfig {
    fn default() -> Self {
        Self {
            list_url: default_list_url(),
            cache_path: default_cache_path(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

fn default_list_url() -> String {
    "https://data.iana.org/TLD/tlds-alpha-by-domain.txt".to_string()
}

fn default_cache_path() -> String {
    "cache/tld_dict.json".to_string()
}

fn default_fetch_timeout_secs() -> u64 {
    30
}
