use crate::archive::archive_relative_path;
use crate::dns_name::{Domain, Nameserver};
use crate::transfer::TransferResult;

pub const REPORT_TITLE: &str = "# List of TLDs & Roots With Zone Transfers Currently Enabled";

/// A (domain, nameserver) pair whose zone transfer succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub domain: Domain,
    pub nameserver: Nameserver,
}

impl ReportEntry {
    pub fn new(domain: Domain, nameserver: Nameserver) -> Self {
        Self { domain, nameserver }
    }

    pub fn archive_link(&self) -> String {
        archive_relative_path(&self.domain, &self.nameserver)
    }

    pub fn to_markdown(&self) -> String {
        format!(
            "* `{}` via `{}`: [Click here to view zone data.]({})\n",
            self.domain.label(),
            self.nameserver,
            self.archive_link()
        )
    }
}

/// Successful transfers of one sweep, kept in the order they were enumerated.
#[derive(Debug, Clone, Default)]
pub struct TransferReport {
    entries: Vec<ReportEntry>,
}

impl TransferReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result only if the transfer succeeded.
    pub fn record(&mut self, result: &TransferResult) -> bool {
        if !result.success {
            return false;
        }
        self.entries.push(ReportEntry::new(
            result.domain.clone(),
            result.nameserver.clone(),
        ));
        true
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render_markdown(&self) -> String {
        let mut out = String::with_capacity(REPORT_TITLE.len() + 2 + self.entries.len() * 128);
        out.push_str(REPORT_TITLE);
        out.push_str("\n\n");
        for entry in &self.entries {
            out.push_str(&entry.to_markdown());
        }
        out
    }
}
