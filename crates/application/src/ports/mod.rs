pub mod archive_store;
pub mod nameserver_lookup;
pub mod publisher;
pub mod report_writer;
pub mod tld_list;
pub mod zone_transfer;

pub use archive_store::ArchiveStore;
pub use nameserver_lookup::NameserverLookup;
pub use publisher::VersionControlPublisher;
pub use report_writer::ReportWriter;
pub use tld_list::{TldCacheStore, TldListFetcher};
pub use zone_transfer::ZoneTransferClient;
