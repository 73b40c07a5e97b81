use zonewatch_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged once the subscriber exists, since the log level comes from the config.
pub fn log_config_summary(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        interval_hours = config.sweep.interval_hours,
        concurrency = config.sweep.concurrency,
        tld_from_cache = config.sweep.tld_from_cache,
        publish = config.publish.enabled,
        report = %config.output.report_path,
        "Configuration loaded"
    );
}
