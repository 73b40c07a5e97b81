//! zonewatch infrastructure: adapters for the application ports.
pub mod dns;
pub mod storage;
pub mod tld;
pub mod transfer;
pub mod vcs;
