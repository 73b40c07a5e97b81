pub mod archive_store;
pub mod report_writer;

pub use archive_store::FsArchiveStore;
pub use report_writer::FsReportWriter;
