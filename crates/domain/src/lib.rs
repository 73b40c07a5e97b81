//! zonewatch domain layer
pub mod archive;
pub mod config;
pub mod dns_name;
pub mod errors;
pub mod report;
pub mod tld_list;
pub mod transfer;

pub use archive::{archive_relative_path, ARCHIVE_DIR, ARCHIVE_FILE_SUFFIX, ROOT_ARCHIVE_SEGMENT};
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_name::{Domain, Nameserver};
pub use errors::DomainError;
pub use report::{ReportEntry, TransferReport, REPORT_TITLE};
pub use tld_list::{parse_tld_list, TldNameserverMap};
pub use transfer::{FailureSignature, TransferClassifier, TransferResult};
