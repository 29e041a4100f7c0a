//! Observability setup.
//!
//! Installs the global tracing subscriber used by the API binary.

use crate::config::{ApiConfig, LogFormat};
use tracing_subscriber::EnvFilter;

/// Initialize tracing from the configured filter and format.
///
/// `RUST_LOG` directives win over the configured default. Logs go to stderr
/// without ANSI colors so they can be captured by log collectors.
pub fn init_tracing(config: &ApiConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
}
