use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_ADVICE_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_ADVICE_TIMEOUT_SECS: u64 = 60;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_SESSION_IDLE_TTL_SECS: u64 = 60 * 60;

/// Gateway configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub advice_api_url: String,
    pub advice_timeout: Duration,
    pub max_upload_bytes: usize,
    /// Sessions untouched for this long are evicted.
    pub session_idle_ttl: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            advice_api_url: lookup("ADVICE_API_URL")
                .unwrap_or_else(|| DEFAULT_ADVICE_API_URL.to_string()),
            advice_timeout: Duration::from_secs(
                parse_or(&lookup, "ADVICE_TIMEOUT_SECS", DEFAULT_ADVICE_TIMEOUT_SECS)
                    .context("ADVICE_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            session_idle_ttl: Duration::from_secs(
                parse_or(&lookup, "SESSION_IDLE_TTL_SECS", DEFAULT_SESSION_IDLE_TTL_SECS)
                    .context("SESSION_IDLE_TTL_SECS must be a whole number of seconds")?,
            ),
            port: parse_or(&lookup, "PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        None => Ok(default),
    }
}
