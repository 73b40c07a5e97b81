use async_trait::async_trait;
use zonewatch_domain::{Domain, Nameserver};

/// Zone transfer (AXFR) capability.
///
/// Never fails: whatever the attempt produced is returned, including vendor
/// failure text or the empty string, and left to the classifier.
#[async_trait]
pub trait ZoneTransferClient: Send + Sync {
    async fn probe(&self, domain: &Domain, nameserver: &Nameserver) -> String;
}
