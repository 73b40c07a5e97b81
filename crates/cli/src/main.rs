//! # zonewatch
//!
//! Periodically asks every root server and every TLD nameserver for a full
//! zone transfer, archives what comes back, and lists the servers that
//! answered in a markdown report.

mod bootstrap;
mod di;

use bootstrap::{daemonize, init_logging, load_config, log_config_summary, ForkOutcome};
use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use zonewatch_domain::{CliOverrides, Config};
use zonewatch_jobs::SweepJob;

#[derive(Parser)]
#[command(name = "zonewatch")]
#[command(about = "Sweeps root and TLD nameservers for open zone transfers")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Detach and keep sweeping in the background
    #[arg(short = 'f', long)]
    fork: bool,

    /// Commit and push the archive and report after each sweep
    #[arg(short = 'p', long = "push-results")]
    push_results: bool,

    /// Hours to sleep between sweeps [default: 2.0]
    #[arg(short = 'i', long)]
    interval: Option<f64>,

    /// Debug logging
    #[arg(short = 'V', long)]
    verbose: bool,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Take TLDs and their nameservers from the cache file instead of IANA
    #[arg(long)]
    from_cache: bool,

    /// Run a single sweep and exit
    #[arg(long)]
    once: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            interval_hours: self.interval,
            publish: self.push_results.then_some(true),
            tld_from_cache: self.from_cache.then_some(true),
            log_level: self.verbose.then(|| "debug".to_string()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.overrides())?;

    if cli.fork {
        if let ForkOutcome::Parent(pid) = daemonize()? {
            println!("zonewatch running in the background (pid {})", pid);
            return Ok(());
        }
    }

    init_logging(&config);
    log_config_summary(cli.config.as_deref(), &config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(config, cli.once))
}

async fn run(config: Config, once: bool) -> anyhow::Result<()> {
    let services = di::Services::build(&config)?;
    let shutdown = CancellationToken::new();

    let mut job = SweepJob::new(services.run_sweep.clone())
        .with_interval(config.sweep.interval())
        .with_cancellation(shutdown.clone());
    if once {
        job = job.with_max_iterations(1);
    }
    let handle = Arc::new(job).start();

    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, stopping");
            signal_token.cancel();
        }
    });

    match handle.await? {
        Ok(sweeps) => {
            info!(sweeps, "zonewatch stopped");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "zonewatch cannot continue");
            Err(e.into())
        }
    }
}
