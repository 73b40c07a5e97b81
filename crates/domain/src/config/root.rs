use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::OutputConfig;
use super::publish::PublishConfig;
use super::resolver::ResolverConfig;
use super::sweep::SweepConfig;
use super::tld::TldConfig;
use super::transfer::TransferConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// One day; `dig +time` beyond that is a misconfiguration.
const MAX_TRANSFER_TIMEOUT_SECS: u64 = 24 * 60 * 60;

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub sweep: SweepConfig,

    #[serde(default)]
    pub transfer: TransferConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub tld: TldConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub interval_hours: Option<f64>,
    pub publish: Option<bool>,
    pub tld_from_cache: Option<bool>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from an optional TOML file, then apply CLI overrides.
    ///
    /// Without a path the built-in defaults are used.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        if !Path::new(path).exists() {
            return Err(ConfigError::FileNotFound(path.to_string()));
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Read(format!("{}: {}", path, e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(hours) = overrides.interval_hours {
            self.sweep.interval_hours = hours;
        }
        if let Some(enabled) = overrides.publish {
            self.publish.enabled = enabled;
        }
        if let Some(from_cache) = overrides.tld_from_cache {
            self.sweep.tld_from_cache = from_cache;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let hours = self.sweep.interval_hours;
        if !hours.is_finite() || hours <= 0.0 || self.sweep.try_interval().is_none() {
            return Err(ConfigError::Validation(format!(
                "sweep.interval_hours must be a positive number of representable hours, got {}",
                hours
            )));
        }

        if self.sweep.concurrency == 0 {
            return Err(ConfigError::Validation(
                "sweep.concurrency must be at least 1".to_string(),
            ));
        }

        if self.sweep.root_nameservers.is_empty() {
            return Err(ConfigError::Validation(
                "sweep.root_nameservers cannot be empty".to_string(),
            ));
        }

        if self.transfer.timeout_secs == 0 || self.transfer.timeout_secs > MAX_TRANSFER_TIMEOUT_SECS {
            return Err(ConfigError::Validation(format!(
                "transfer.timeout_secs must be between 1 and {}, got {}",
                MAX_TRANSFER_TIMEOUT_SECS, self.transfer.timeout_secs
            )));
        }

        if self.resolver.upstream_servers.is_empty() {
            return Err(ConfigError::Validation(
                "resolver.upstream_servers cannot be empty".to_string(),
            ));
        }

        for server in &self.resolver.upstream_servers {
            if server.parse::<SocketAddr>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "resolver.upstream_servers: '{}' is not an ip:port address",
                    server
                )));
            }
        }

        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "resolver.query_timeout_ms must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
