use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, error, warn};
use zonewatch_application::ports::ZoneTransferClient;
use zonewatch_domain::{Domain, Nameserver};

/// `dig` may try every address of the nameserver, each bounded by `+time`.
const WATCHDOG_FACTOR: u64 = 4;

/// AXFR through an external `dig` process.
///
/// The transfer runs out of process so a hung exchange is bounded twice:
/// by `dig +time=` and by a watchdog that kills the child.
pub struct DigZoneTransferClient {
    dig_path: String,
    timeout_secs: u64,
}

impl DigZoneTransferClient {
    pub fn new(dig_path: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            dig_path: dig_path.into(),
            timeout_secs,
        }
    }

    pub fn args(domain: &Domain, nameserver: &Nameserver, timeout_secs: u64) -> Vec<String> {
        vec![
            "AXFR".to_string(),
            domain.to_string(),
            format!("@{}", nameserver),
            "+nocomments".to_string(),
            "+nocmd".to_string(),
            "+noquestion".to_string(),
            "+nostats".to_string(),
            format!("+time={}", timeout_secs),
        ]
    }

    fn watchdog(&self) -> Duration {
        Duration::from_secs(
            self.timeout_secs
                .saturating_mul(WATCHDOG_FACTOR)
                .saturating_add(5),
        )
    }
}

#[async_trait]
impl ZoneTransferClient for DigZoneTransferClient {
    async fn probe(&self, domain: &Domain, nameserver: &Nameserver) -> String {
        let mut command = Command::new(&self.dig_path);
        command
            .args(Self::args(domain, nameserver, self.timeout_secs))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match tokio::time::timeout(self.watchdog(), command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                error!(
                    dig = %self.dig_path,
                    error = %e,
                    "Failed to run zone transfer query"
                );
                return String::new();
            }
            Err(_) => {
                warn!(
                    domain = %domain,
                    nameserver = %nameserver,
                    watchdog_secs = self.watchdog().as_secs(),
                    "Zone transfer query killed by watchdog"
                );
                return String::new();
            }
        };

        if !output.stderr.is_empty() {
            debug!(
                domain = %domain,
                nameserver = %nameserver,
                stderr = %String::from_utf8_lossy(&output.stderr).trim_end(),
                "dig wrote to stderr"
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}
