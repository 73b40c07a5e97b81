pub mod config;
pub mod daemon;
pub mod logging;

pub use config::{load_config, log_config_summary};
pub use daemon::{daemonize, ForkOutcome};
pub use logging::init_logging;
