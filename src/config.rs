//! Client configuration loaded from environment variables.
//!
//! All variables are optional; an empty value counts as unset:
//! - `KALSHI_API_URL` — REST base URL (defaults to production)
//! - `KALSHI_TIMEOUT_SECS` — per-request timeout in whole seconds
//! - `KALSHI_PERIOD_INTERVAL` — candle length in minutes (`1`, `60` or `1440`)

use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::shared::PeriodInterval;

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a positive integer number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be one of 1, 60 or 1440 minutes, got {value:?}")]
    InvalidPeriodInterval { var: &'static str, value: String },
}

/// Settings shared by [`KalshiClient`](crate::client::KalshiClient) and the
/// candlestick deriver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KalshiConfig {
    pub api_url: String,
    pub timeout: Duration,
    /// Candle length requested from the API and used to compute `start_ts`.
    pub period_interval: PeriodInterval,
}

impl Default for KalshiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            period_interval: PeriodInterval::Hour,
        }
    }
}

impl KalshiConfig {
    const API_URL_VAR: &'static str = "KALSHI_API_URL";
    const TIMEOUT_VAR: &'static str = "KALSHI_TIMEOUT_SECS";
    const PERIOD_VAR: &'static str = "KALSHI_PERIOD_INTERVAL";

    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the timeout is not a positive integer or the
    /// period interval is not a supported candle length.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_url = non_empty_var(Self::API_URL_VAR).unwrap_or(defaults.api_url);

        let timeout = match non_empty_var(Self::TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: Self::TIMEOUT_VAR,
                        value: raw,
                    })
                }
            },
            None => defaults.timeout,
        };

        let period_interval = match non_empty_var(Self::PERIOD_VAR) {
            Some(raw) => {
                raw.trim()
                    .parse::<PeriodInterval>()
                    .map_err(|_| ConfigError::InvalidPeriodInterval {
                        var: Self::PERIOD_VAR,
                        value: raw.clone(),
                    })?
            }
            None => defaults.period_interval,
        };

        Ok(Self {
            api_url,
            timeout,
            period_interval,
        })
    }
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
