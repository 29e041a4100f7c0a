//! Runtime configuration read from environment variables.

use std::path::PathBuf;
use tracing::warn;

const DEFAULT_PORT: u16 = 8081;
const DEFAULT_LOG_FILTER: &str = "info";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Port to listen on (`PORT`, default 8081)
    pub port: u16,
    /// SQLite database file (`HELPDESK_DB_PATH`); in-memory stores when unset
    pub database_path: Option<PathBuf>,
    /// Allowed CORS origins (`CORS_ALLOWED_ORIGINS`, comma separated); permissive when empty
    pub cors_allowed_origins: Vec<String>,
    /// Requests per minute (`RATE_LIMIT_PER_MINUTE`); disabled when unset or zero
    pub rate_limit_per_minute: Option<u32>,
    /// Tracing filter directive (`RUST_LOG`)
    pub log_filter: String,
    /// `LOG_FORMAT=json` for JSON logs
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_path: None,
            cors_allowed_origins: Vec::new(),
            rate_limit_per_minute: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("Invalid PORT value {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => defaults.port,
        };

        let rate_limit_per_minute = non_empty("RATE_LIMIT_PER_MINUTE").and_then(|raw| {
            match raw.parse::<u32>() {
                Ok(0) => None,
                Ok(n) => Some(n),
                Err(_) => {
                    warn!("Invalid RATE_LIMIT_PER_MINUTE value {:?}, rate limiting disabled", raw);
                    None
                }
            }
        });

        let cors_allowed_origins = non_empty("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let log_format = match non_empty("LOG_FORMAT").as_deref() {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            port,
            database_path: non_empty("HELPDESK_DB_PATH").map(PathBuf::from),
            cors_allowed_origins,
            rate_limit_per_minute,
            log_filter: non_empty("RUST_LOG").unwrap_or(defaults.log_filter),
            log_format,
        }
    }
}
