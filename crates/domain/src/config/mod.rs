//! Configuration module for zonewatch
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `sweep`: Sweep interval, concurrency and root nameservers
//! - `transfer`: Zone transfer prober settings
//! - `resolver`: NS lookup settings
//! - `tld`: TLD list source and cache file
//! - `output`: Archive and report locations
//! - `publish`: Git publishing
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod output;
pub mod publish;
pub mod resolver;
pub mod root;
pub mod sweep;
pub mod tld;
pub mod transfer;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::OutputConfig;
pub use publish::PublishConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use sweep::{SweepConfig, ROOT_NAMESERVERS};
pub use tld::TldConfig;
pub use transfer::TransferConfig;
