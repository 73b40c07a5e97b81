use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Fully-qualified DNS name, always stored lower-case with a trailing dot.
///
/// The root zone is the single dot `"."`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Domain(Arc<str>);

impl Domain {
    pub fn root() -> Self {
        Self(Arc::from("."))
    }

    /// Parse a name, appending the trailing dot when missing.
    ///
    /// Rejects empty input and names containing empty labels (`"com.."`,
    /// `".com"`).
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        let trimmed = name.trim();
        if trimmed == "." {
            return Ok(Self::root());
        }
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName("empty name".to_string()));
        }

        let without_dot = trimmed.strip_suffix('.').unwrap_or(trimmed);
        if without_dot.split('.').any(|label| label.is_empty()) {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' contains an empty label",
                trimmed
            )));
        }

        Ok(Self(Arc::from(format!(
            "{}.",
            without_dot.to_ascii_lowercase()
        ))))
    }

    /// Build the fully-qualified domain for a TLD label such as `"COM"`.
    pub fn from_tld(tld: &str) -> Result<Self, DomainError> {
        let label = tld.trim();
        if label.is_empty() || label == "." {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' is not a TLD label",
                tld
            )));
        }
        Self::parse(label)
    }

    pub fn is_root(&self) -> bool {
        &*self.0 == "."
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hostname as shown in the report: `"."` for the root, otherwise the
    /// name without its trailing dot.
    pub fn label(&self) -> &str {
        if self.is_root() {
            "."
        } else {
            self.without_trailing_dot()
        }
    }

    /// Directory segment used under the archive root.
    pub fn archive_segment(&self) -> &str {
        if self.is_root() {
            crate::archive::ROOT_ARCHIVE_SEGMENT
        } else {
            self.without_trailing_dot()
        }
    }

    fn without_trailing_dot(&self) -> &str {
        self.0.strip_suffix('.').unwrap_or(&self.0)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Domain {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Domain> for String {
    fn from(value: Domain) -> Self {
        value.0.to_string()
    }
}

/// Hostname of an authoritative nameserver, kept exactly as resolved
/// (trailing dot included).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nameserver(Arc<str>);

impl Nameserver {
    pub fn new(host: impl AsRef<str>) -> Self {
        Self(Arc::from(host.as_ref().trim()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nameserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Nameserver {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Nameserver {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
