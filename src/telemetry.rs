//! Tracing subscriber setup

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level; `verbose` forces `debug` for
/// this crate.
pub fn init(logging: &LoggingConfig, verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { logging.level.as_str() };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("warn,airwatch={level}")))
        .with_context(|| format!("Invalid log level '{level}'"))?;

    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let result = match logging.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.pretty().try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
}
