//! High-level client — `KalshiClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::config::KalshiConfig;
use crate::domain::candlestick::client::Candlesticks;
use crate::domain::event::client::Events;
use crate::domain::market::client::Markets;
use crate::domain::series::client::SeriesClient;
use crate::error::SdkError;
use crate::http::KalshiHttp;
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::shared::PeriodInterval;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::candlestick::client::Candlesticks as CandlesticksClient;
pub use crate::domain::event::client::Events as EventsClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::series::client::SeriesClient as SeriesSubClient;

/// The primary entry point for Kalshi market data.
///
/// Provides nested sub-client accessors for each domain:
/// `client.series()`, `client.markets()`, `client.candlesticks()`, etc.
#[derive(Clone)]
pub struct KalshiClient {
    pub(crate) http: KalshiHttp,
    /// Candle length used by [`Candlesticks::analysis_between`].
    pub(crate) period_interval: PeriodInterval,
}

impl KalshiClient {
    pub fn builder() -> KalshiClientBuilder {
        KalshiClientBuilder::default()
    }

    /// Build a client from a loaded [`KalshiConfig`].
    pub fn from_config(config: &KalshiConfig) -> Result<Self, SdkError> {
        Self::builder()
            .base_url(&config.api_url)
            .timeout(config.timeout)
            .period_interval(config.period_interval)
            .build()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn series(&self) -> SeriesClient<'_> {
        SeriesClient { client: self }
    }

    pub fn events(&self) -> Events<'_> {
        Events { client: self }
    }

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn candlesticks(&self) -> Candlesticks<'_> {
        Candlesticks { client: self }
    }

    pub fn period_interval(&self) -> PeriodInterval {
        self.period_interval
    }

    /// Direct access to the endpoint-level client.
    pub fn http(&self) -> &KalshiHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct KalshiClientBuilder {
    base_url: String,
    timeout: Duration,
    period_interval: PeriodInterval,
}

impl Default for KalshiClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            period_interval: PeriodInterval::default(),
        }
    }
}

impl KalshiClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn period_interval(mut self, interval: PeriodInterval) -> Self {
        self.period_interval = interval;
        self
    }

    pub fn build(self) -> Result<KalshiClient, SdkError> {
        if self.base_url.trim().is_empty() {
            return Err(SdkError::Validation("base_url must not be empty".to_string()));
        }
        Ok(KalshiClient {
            http: KalshiHttp::with_timeout(&self.base_url, self.timeout)?,
            period_interval: self.period_interval,
        })
    }
}
