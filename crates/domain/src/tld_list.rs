use std::collections::BTreeMap;

/// Persisted TLD → nameserver hostnames map (`cache/tld_dict.json`).
///
/// A `BTreeMap` keeps the keys sorted, which matches the order of the IANA
/// list the map was built from.
pub type TldNameserverMap = BTreeMap<String, Vec<String>>;

/// Parse the IANA `tlds-alpha-by-domain.txt` body.
///
/// Blank lines and any line containing `#` are dropped; entries are trimmed
/// and lower-cased. Order is preserved.
pub fn parse_tld_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains('#'))
        .map(str::to_ascii_lowercase)
        .collect()
}
