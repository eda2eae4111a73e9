//! # Kalshi Market Data
//!
//! A read-only Rust client for Kalshi market data: series, events, markets
//! and candlesticks, plus the pipeline that turns candlesticks into
//! analysis-ready bars.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Ticker newtypes, period intervals, domain models and the
//!    candlestick flatten/derive pipeline (always available, no I/O)
//! 2. **HTTP API** — `KalshiHttp`, one method per REST endpoint
//! 3. **High-Level Client** — `KalshiClient` with nested sub-clients
//! 4. **Indicators** — Crossing signals over analysis-record columns
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kalshi_market_data::prelude::*;
//!
//! let client = KalshiClient::builder().build()?;
//!
//! let series = client.series().get(&SeriesTicker::new("KXHIGHNY")).await?;
//! let bars = client
//!     .candlesticks()
//!     .analysis_between(&series_ticker, &market_ticker, start_ts, end_ts)
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Environment-driven configuration.
pub mod config;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Endpoint-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `KalshiClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Indicators ──────────────────────────────────────────────────────

pub mod indicators;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{EventTicker, MarketTicker, PeriodInterval, SeriesTicker};

    // Domain types — series, event, market
    pub use crate::domain::event::{Event, Milestone};
    pub use crate::domain::market::Market;
    pub use crate::domain::series::{Series, SeriesList, SettlementSource, TagsByCategories};

    // Domain types — candlestick pipeline
    pub use crate::domain::candlestick::{
        analyze, derive, derive_all, flatten, flatten_all, parse_candlesticks, AnalysisRecord,
        Candlestick, CandlestickError, CandlestickOhlc, CandlestickPriceOhlc,
        FlattenedCandlestick,
    };

    // Query parameters
    pub use crate::domain::candlestick::wire::CandlesticksParams;
    pub use crate::domain::event::wire::EventsParams;
    pub use crate::domain::market::wire::MarketsParams;
    pub use crate::domain::series::wire::SeriesListParams;

    // Time helpers
    pub use crate::shared::{earliest_open_ts, iso_to_unix, latest_close_ts, unix_to_datestr};

    // Indicators
    pub use crate::indicators::{column, constant, crossover, crossunder, AnalysisColumn};

    // Errors + config
    pub use crate::config::{ConfigError, KalshiConfig};
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CandlesticksClient, EventsClient, KalshiClient, KalshiClientBuilder, MarketsClient,
        SeriesSubClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::KalshiHttp;
}
