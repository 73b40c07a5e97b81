use crate::dns_name::{Domain, Nameserver};
use std::sync::Arc;

/// Known failure wording printed by `dig` when an AXFR does not go through.
///
/// This list is NOT exhaustive. Output that matches none of these (and is not
/// empty) is treated as a successful transfer, so a new failure message from
/// a future `dig` release will be reported as a leak until it is added here
/// or through `transfer.extra_failure_signatures`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureSignature {
    TransferFailed,
    ConnectionRefused,
    CommunicationsError,
    NetworkUnreachable,
    HostUnreachable,
    NoServersReachable,
}

impl FailureSignature {
    pub const ALL: [FailureSignature; 6] = [
        FailureSignature::TransferFailed,
        FailureSignature::ConnectionRefused,
        FailureSignature::CommunicationsError,
        FailureSignature::NetworkUnreachable,
        FailureSignature::HostUnreachable,
        FailureSignature::NoServersReachable,
    ];

    /// Exact text searched for in the raw transfer output.
    pub fn pattern(&self) -> &'static str {
        match self {
            FailureSignature::TransferFailed => "Transfer failed.",
            FailureSignature::ConnectionRefused => "failed: connection refused.",
            FailureSignature::CommunicationsError => "communications error",
            FailureSignature::NetworkUnreachable => "failed: network unreachable.",
            FailureSignature::HostUnreachable => "failed: host unreachable.",
            FailureSignature::NoServersReachable => {
                "connection timed out; no servers could be reached"
            }
        }
    }
}

/// Blocklist classifier for raw zone transfer output.
#[derive(Debug, Clone)]
pub struct TransferClassifier {
    patterns: Vec<String>,
}

impl TransferClassifier {
    pub fn new() -> Self {
        Self {
            patterns: FailureSignature::ALL
                .iter()
                .map(|s| s.pattern().to_string())
                .collect(),
        }
    }

    /// Add extra failure patterns on top of the built-in signatures.
    pub fn with_extra_patterns<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pattern in extra {
            let pattern = pattern.into();
            if !pattern.is_empty() && !self.patterns.contains(&pattern) {
                self.patterns.push(pattern);
            }
        }
        self
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Empty output, or output containing any failure pattern, is a failure.
    /// Everything else is a success.
    pub fn is_successful(&self, raw_output: &str) -> bool {
        !raw_output.is_empty() && self.matched_pattern(raw_output).is_none()
    }

    /// First failure pattern found in the output, if any.
    pub fn matched_pattern(&self, raw_output: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|p| raw_output.contains(p.as_str()))
            .map(String::as_str)
    }

    /// Built-in signature found in the output, if any.
    pub fn matched_signature(raw_output: &str) -> Option<FailureSignature> {
        FailureSignature::ALL
            .into_iter()
            .find(|s| raw_output.contains(s.pattern()))
    }

    pub fn classify(&self, domain: Domain, nameserver: Nameserver, raw_output: String) -> TransferResult {
        let success = self.is_successful(&raw_output);
        TransferResult {
            domain,
            nameserver,
            raw_output: Arc::from(raw_output),
            success,
        }
    }
}

impl Default for TransferClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one probe against a (domain, nameserver) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferResult {
    pub domain: Domain,
    pub nameserver: Nameserver,
    pub raw_output: Arc<str>,
    pub success: bool,
}
