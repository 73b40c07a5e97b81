use crate::dns_name::{Domain, Nameserver};

/// Top-level directory holding one sub-directory per probed zone.
pub const ARCHIVE_DIR: &str = "archives";

/// Directory segment used for the root zone.
pub const ROOT_ARCHIVE_SEGMENT: &str = "root";

/// Appended to the nameserver hostname, without separator.
pub const ARCHIVE_FILE_SUFFIX: &str = "zone";

/// Relative archive path for a (domain, nameserver) pair.
///
/// `archive_relative_path(".", "a.root-servers.net.")` is
/// `archives/root/a.root-servers.net.zone`.
pub fn archive_relative_path(domain: &Domain, nameserver: &Nameserver) -> String {
    format!(
        "{}/{}/{}{}",
        ARCHIVE_DIR,
        domain.archive_segment(),
        nameserver.as_str(),
        ARCHIVE_FILE_SUFFIX
    )
}
