//! Wallet configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FACEPAY_DATA_PATH` - File-store location (default: `facepay.json`)
//! - `FACEPAY_NOTIFY_DELAY_MS` - Mock notification delay (default: 2000)
//! - `FACEPAY_SCAN_TICK_MS` - Face-scan progress tick (default: 300)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_PATH: &str = "facepay.json";
const DEFAULT_NOTIFY_DELAY_MS: u64 = 2_000;
const DEFAULT_SCAN_TICK_MS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Wallet application configuration.
#[derive(Debug, Clone)]
pub struct WalletConfig {
    /// Where the file-backed store lives.
    pub data_path: PathBuf,
    /// Delay before the mock payment notification is delivered.
    pub notify_delay: Duration,
    /// Interval between face-scan progress ticks.
    pub scan_tick: Duration,
}

impl WalletConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a duration variable is present but not a
    /// non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_path = PathBuf::from(get_env_or_default("FACEPAY_DATA_PATH", DEFAULT_DATA_PATH));
        let notify_delay = get_millis("FACEPAY_NOTIFY_DELAY_MS", DEFAULT_NOTIFY_DELAY_MS)?;
        let scan_tick = get_millis("FACEPAY_SCAN_TICK_MS", DEFAULT_SCAN_TICK_MS)?;

        Ok(Self {
            data_path,
            notify_delay,
            scan_tick,
        })
    }
}

impl Default for WalletConfig {
    /// The reference app's fixed timings: 2s notification delay, 300ms scan
    /// tick, data file in the working directory.
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            notify_delay: Duration::from_millis(DEFAULT_NOTIFY_DELAY_MS),
            scan_tick: Duration::from_millis(DEFAULT_SCAN_TICK_MS),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a millisecond duration variable, falling back to `default_ms`.
fn get_millis(key: &str, default_ms: u64) -> Result<Duration, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        Err(_) => Ok(Duration::from_millis(default_ms)),
    }
}
