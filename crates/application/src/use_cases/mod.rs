pub mod probe_transfer;
pub mod run_sweep;

pub use probe_transfer::ProbeTransferUseCase;
pub use run_sweep::{RunSweepUseCase, SweepSummary};
