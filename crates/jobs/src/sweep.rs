use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use zonewatch_application::use_cases::RunSweepUseCase;
use zonewatch_domain::DomainError;

/// Repeats sweeps forever, sleeping `interval` between the end of one and
/// the start of the next.
///
/// Cancellation drops the in-flight sweep immediately. A sweep that cannot
/// get its TLD list ends the job with the error.
///
/// # Example
///
/// ```rust,ignore
/// let handle = Arc::new(
///     SweepJob::new(run_sweep)
///         .with_interval(Duration::from_secs(7200))
///         .with_cancellation(token.clone()),
/// )
/// .start();
/// ```
pub struct SweepJob {
    sweep: Arc<RunSweepUseCase>,
    interval: Duration,
    max_iterations: Option<u64>,
    shutdown: CancellationToken,
}

impl SweepJob {
    pub fn new(sweep: Arc<RunSweepUseCase>) -> Self {
        Self {
            sweep,
            interval: Duration::from_secs(2 * 60 * 60),
            max_iterations: None,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Stop after `iterations` completed sweeps.
    pub fn with_max_iterations(mut self, iterations: u64) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<Result<u64, DomainError>> {
        tokio::spawn(async move { self.run().await })
    }

    /// Returns the number of completed sweeps.
    pub async fn run(&self) -> Result<u64, DomainError> {
        info!(
            interval_secs = self.interval.as_secs_f64(),
            max_iterations = ?self.max_iterations,
            "Starting sweep job"
        );

        let mut completed: u64 = 0;

        loop {
            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    info!(completed, "SweepJob: shutting down");
                    return Ok(completed);
                }
                result = self.sweep.execute() => match result {
                    Ok(summary) => {
                        completed += 1;
                        info!(
                            sweep = completed,
                            probed = summary.probed,
                            transferable = summary.report.len(),
                            published = summary.published,
                            "Sweep completed"
                        );
                    }
                    Err(e) => {
                        error!(error = %e, "Sweep aborted");
                        return Err(e);
                    }
                }
            }

            if self.max_iterations.is_some_and(|max| completed >= max) {
                info!(completed, "SweepJob: iteration limit reached");
                return Ok(completed);
            }

            info!(sleep_secs = self.interval.as_secs_f64(), "Sleeping ...");

            tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => {
                    info!(completed, "SweepJob: shutting down");
                    return Ok(completed);
                }
                _ = tokio::time::sleep(self.interval) => {}
            }
        }
    }
}
