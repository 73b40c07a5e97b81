use std::sync::Arc;
use zonewatch_application::services::{NameserverCache, NameserverResolver, TldSource};
use zonewatch_application::use_cases::{ProbeTransferUseCase, RunSweepUseCase};
use zonewatch_domain::{Config, Nameserver, TransferClassifier};
use zonewatch_infrastructure::dns::HickoryNameserverLookup;
use zonewatch_infrastructure::storage::{FsArchiveStore, FsReportWriter};
use zonewatch_infrastructure::tld::{IanaTldFetcher, JsonTldCacheStore};
use zonewatch_infrastructure::transfer::DigZoneTransferClient;
use zonewatch_infrastructure::vcs::GitPublisher;

/// Adapters wired to their ports for one process lifetime.
///
/// The nameserver cache is shared by the TLD source and the sweep, so a
/// TLD resolved while refreshing the cache file is not looked up twice.
pub struct Services {
    pub run_sweep: Arc<RunSweepUseCase>,
}

impl Services {
    pub fn build(config: &Config) -> anyhow::Result<Self> {
        let lookup = Arc::new(HickoryNameserverLookup::from_config(
            &config.resolver.upstream_servers,
            config.resolver.query_timeout_ms,
        )?);
        let resolver = Arc::new(NameserverResolver::new(
            lookup,
            Arc::new(NameserverCache::new()),
        ));

        let fetcher = Arc::new(IanaTldFetcher::new(
            config.tld.list_url.clone(),
            config.tld.fetch_timeout_secs,
        )?);
        let cache_store = Arc::new(JsonTldCacheStore::new(&config.tld.cache_path));
        let tld_source = Arc::new(
            TldSource::new(fetcher, cache_store, resolver.clone())
                .with_persistence(config.sweep.persist_tld_cache),
        );

        let classifier = TransferClassifier::new()
            .with_extra_patterns(config.transfer.extra_failure_signatures.iter().cloned());
        let client = Arc::new(DigZoneTransferClient::new(
            config.transfer.dig_path.clone(),
            config.transfer.timeout_secs,
        ));
        let archive = Arc::new(FsArchiveStore::new(&config.output.archive_dir));
        let probe = Arc::new(ProbeTransferUseCase::new(client, archive).with_classifier(classifier));

        let roots = config
            .sweep
            .root_nameservers
            .iter()
            .map(Nameserver::new)
            .collect();
        let report_writer = Arc::new(FsReportWriter::new(&config.output.report_path));

        let mut run_sweep = RunSweepUseCase::new(roots, tld_source, resolver, probe, report_writer)
            .with_tld_from_cache(config.sweep.tld_from_cache)
            .with_concurrency(config.sweep.concurrency);

        if config.publish.enabled {
            run_sweep = run_sweep.with_publisher(Arc::new(GitPublisher::new(
                config.publish.git_path.clone(),
                &config.publish.workdir,
                config.publish.commit_message.clone(),
            )));
        }

        Ok(Self {
            run_sweep: Arc::new(run_sweep),
        })
    }
}
