use anyhow::Result;
use std::path::Path;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

/// Prefix of the daily log files
pub const LOG_PREFIX: &str = "donein3.log";

/// Send logs to daily files under `<data_dir>/logs`.
///
/// The terminal belongs to the UI, so nothing is written to stdout or
/// stderr. `RUST_LOG` overrides the default `info` level.
pub fn enable_logging(data_dir: &Path) -> Result<()> {
    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(7)
        .filename_prefix(LOG_PREFIX)
        .build(data_dir.join("logs"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info",
            env!("CARGO_PKG_NAME").replace('-', "_")
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(())
}
