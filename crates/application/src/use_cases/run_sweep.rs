use crate::ports::{ReportWriter, VersionControlPublisher};
use crate::services::{NameserverResolver, TldSource};
use crate::use_cases::ProbeTransferUseCase;
use futures::stream::{self, Stream, StreamExt};
use std::sync::Arc;
use tracing::{error, info, warn};
use zonewatch_domain::{Domain, DomainError, Nameserver, TransferReport};

/// What one sweep did.
#[derive(Debug, Clone)]
pub struct SweepSummary {
    /// (domain, nameserver) pairs probed, roots included
    pub probed: usize,
    pub tld_count: usize,
    pub report: TransferReport,
    pub report_written: bool,
    pub published: bool,
}

/// Use case: one full pass over the root servers and every TLD.
///
/// Roots are probed against `.` first, then each TLD's nameservers in list
/// order. Up to `concurrency` probes run at once, but results are consumed
/// in enumeration order, so the report never depends on completion order.
pub struct RunSweepUseCase {
    root_nameservers: Vec<Nameserver>,
    tld_source: Arc<TldSource>,
    resolver: Arc<NameserverResolver>,
    probe: Arc<ProbeTransferUseCase>,
    report_writer: Arc<dyn ReportWriter>,
    publisher: Option<Arc<dyn VersionControlPublisher>>,
    tld_from_cache: bool,
    concurrency: usize,
}

impl RunSweepUseCase {
    pub fn new(
        root_nameservers: Vec<Nameserver>,
        tld_source: Arc<TldSource>,
        resolver: Arc<NameserverResolver>,
        probe: Arc<ProbeTransferUseCase>,
        report_writer: Arc<dyn ReportWriter>,
    ) -> Self {
        Self {
            root_nameservers,
            tld_source,
            resolver,
            probe,
            report_writer,
            publisher: None,
            tld_from_cache: false,
            concurrency: 1,
        }
    }

    pub fn with_publisher(mut self, publisher: Arc<dyn VersionControlPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    pub fn with_tld_from_cache(mut self, from_cache: bool) -> Self {
        self.tld_from_cache = from_cache;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Fails only when the TLD list cannot be obtained.
    pub async fn execute(&self) -> Result<SweepSummary, DomainError> {
        info!(
            roots = self.root_nameservers.len(),
            concurrency = self.concurrency,
            "Starting sweep"
        );

        let mut report = TransferReport::new();

        let root_pairs: Vec<(Domain, Nameserver)> = self
            .root_nameservers
            .iter()
            .map(|ns| (Domain::root(), ns.clone()))
            .collect();
        let mut probed = self
            .probe_pairs(stream::iter(root_pairs), &mut report)
            .await;

        let tlds = self.tld_source.list_tlds(self.tld_from_cache).await?;
        let tld_count = tlds.len();
        let domains: Vec<Domain> = tlds
            .iter()
            .filter_map(|tld| match Domain::from_tld(tld) {
                Ok(domain) => Some(domain),
                Err(e) => {
                    warn!(tld = %tld, error = %e, "Skipping invalid TLD entry");
                    None
                }
            })
            .collect();

        let resolver = Arc::clone(&self.resolver);
        let tld_pairs = stream::iter(domains)
            .then(move |domain| {
                let resolver = Arc::clone(&resolver);
                async move {
                    let nameservers = resolver.resolve(&domain).await;
                    let pairs: Vec<(Domain, Nameserver)> = nameservers
                        .iter()
                        .map(|ns| (domain.clone(), ns.clone()))
                        .collect();
                    stream::iter(pairs)
                }
            })
            .flatten();
        probed += self.probe_pairs(tld_pairs, &mut report).await;

        info!(
            probed,
            tlds = tld_count,
            transferable = report.len(),
            "Sweep finished"
        );

        let report_written = match self
            .report_writer
            .write_report(&report.render_markdown())
            .await
        {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Failed to write report");
                false
            }
        };

        let published = match &self.publisher {
            Some(publisher) => match publisher.publish().await {
                Ok(()) => {
                    info!("Results published");
                    true
                }
                Err(e) => {
                    warn!(error = %e, "Publishing results failed");
                    false
                }
            },
            None => false,
        };

        Ok(SweepSummary {
            probed,
            tld_count,
            report,
            report_written,
            published,
        })
    }

    async fn probe_pairs<S>(&self, pairs: S, report: &mut TransferReport) -> usize
    where
        S: Stream<Item = (Domain, Nameserver)>,
    {
        let probe = &self.probe;
        let mut results = std::pin::pin!(pairs
            .map(move |(domain, nameserver)| probe.execute(domain, nameserver))
            .buffered(self.concurrency));

        let mut probed = 0;
        while let Some(result) = results.next().await {
            probed += 1;
            report.record(&result);
        }
        probed
    }
}
