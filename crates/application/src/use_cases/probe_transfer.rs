use crate::ports::{ArchiveStore, ZoneTransferClient};
use std::sync::Arc;
use tracing::{debug, error, info};
use zonewatch_domain::{Domain, Nameserver, TransferClassifier, TransferResult};

/// Use case: attempt one zone transfer, classify it and archive the output.
///
/// The archive is written whatever the outcome, so failures stay auditable.
pub struct ProbeTransferUseCase {
    client: Arc<dyn ZoneTransferClient>,
    archive: Arc<dyn ArchiveStore>,
    classifier: TransferClassifier,
}

impl ProbeTransferUseCase {
    pub fn new(client: Arc<dyn ZoneTransferClient>, archive: Arc<dyn ArchiveStore>) -> Self {
        Self {
            client,
            archive,
            classifier: TransferClassifier::new(),
        }
    }

    pub fn with_classifier(mut self, classifier: TransferClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub async fn execute(&self, domain: Domain, nameserver: Nameserver) -> TransferResult {
        debug!(domain = %domain, nameserver = %nameserver, "Attempting zone transfer");

        let raw_output = self.client.probe(&domain, &nameserver).await;
        let result = self.classifier.classify(domain, nameserver, raw_output);

        if result.success {
            info!(
                domain = %result.domain,
                nameserver = %result.nameserver,
                bytes = result.raw_output.len(),
                "Zone transfer succeeded"
            );
        } else {
            debug!(
                domain = %result.domain,
                nameserver = %result.nameserver,
                reason = self.classifier.matched_pattern(&result.raw_output).unwrap_or("empty output"),
                "Zone transfer refused"
            );
        }

        if let Err(e) = self
            .archive
            .write(&result.domain, &result.nameserver, &result.raw_output)
            .await
        {
            error!(
                domain = %result.domain,
                nameserver = %result.nameserver,
                error = %e,
                "Failed to archive transfer output"
            );
        }

        result
    }
}
