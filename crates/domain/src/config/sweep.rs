use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root servers probed against `.` at the start of every sweep, in probe order.
pub const ROOT_NAMESERVERS: [&str; 13] = [
    "e.root-servers.net.",
    "h.root-servers.net.",
    "l.root-servers.net.",
    "i.root-servers.net.",
    "a.root-servers.net.",
    "d.root-servers.net.",
    "c.root-servers.net.",
    "b.root-servers.net.",
    "j.root-servers.net.",
    "k.root-servers.net.",
    "g.root-servers.net.",
    "m.root-servers.net.",
    "f.root-servers.net.",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SweepConfig {
    /// Hours between the end of one sweep and the start of the next
    #[serde(default = "default_interval_hours")]
    pub interval_hours: f64,

    /// Probes in flight at once (1 = strictly sequential)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Read the TLD list from the cache file instead of IANA
    #[serde(default)]
    pub tld_from_cache: bool,

    /// Write the TLD → nameserver map after a remote refresh
    #[serde(default = "default_true")]
    pub persist_tld_cache: bool,

    #[serde(default = "default_root_nameservers")]
    pub root_nameservers: Vec<String>,
}

impl SweepConfig {
    /// `None` when the hours are negative, not finite, or too large for a `Duration`.
    pub fn try_interval(&self) -> Option<Duration> {
        Duration::try_from_secs_f64(self.interval_hours * 60.0 * 60.0).ok()
    }

    /// Saturates at `Duration::MAX`; `Config::validate` rejects such values.
    pub fn interval(&self) -> Duration {
        self.try_interval().unwrap_or(Duration::MAX)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            interval_hours: default_interval_hours(),
            concurrency: default_concurrency(),
            tld_from_cache: false,
            persist_tld_cache: true,
            root_nameservers: default_root_nameservers(),
        }
    }
}

fn default_interval_hours() -> f64 {
    2.0
}

fn default_concurrency() -> usize {
    1
}

fn default_true() -> bool {
    true
}

fn default_root_nameservers() -> Vec<String> {
    ROOT_NAMESERVERS.iter().map(|s| s.to_string()).collect()
}
