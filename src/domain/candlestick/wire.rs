//! Wire types for candlestick responses (REST).

use super::Candlestick;
use crate::shared::PeriodInterval;
use serde::{Deserialize, Serialize};

/// Response for `GET /series/{series}/markets/{ticker}/candlesticks`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketCandlesticksResponse {
    pub ticker: String,
    pub candlesticks: Vec<Candlestick>,
}

/// Response for `GET /series/{series}/events/{ticker}/candlesticks`.
///
/// `market_candlesticks[i]` belongs to `market_tickers[i]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventCandlesticksResponse {
    pub market_tickers: Vec<String>,
    pub market_candlesticks: Vec<Vec<Candlestick>>,
    /// End of the returned range when the request asked for more than the
    /// server's maximum number of buckets.
    pub adjusted_end_ts: i64,
}

impl EventCandlesticksResponse {
    /// Pair each market ticker with its candlesticks.
    pub fn by_market(&self) -> impl Iterator<Item = (&str, &[Candlestick])> {
        self.market_tickers
            .iter()
            .map(String::as_str)
            .zip(self.market_candlesticks.iter().map(Vec::as_slice))
    }
}

/// Query parameters for the candlestick endpoints.
#[derive(Debug, Clone)]
pub struct CandlesticksParams {
    /// Start of the range, Unix seconds.
    pub start_ts: i64,
    /// End of the range, Unix seconds.
    pub end_ts: i64,
    pub period_interval: PeriodInterval,
    /// Prepend a synthetic bar built from the latest candlestick before
    /// `start_ts`. Market endpoint only.
    pub include_latest_before_start: bool,
}

impl CandlesticksParams {
    pub fn new(start_ts: i64, end_ts: i64, period_interval: PeriodInterval) -> Self {
        Self {
            start_ts,
            end_ts,
            period_interval,
            include_latest_before_start: false,
        }
    }

    pub fn with_latest_before_start(mut self) -> Self {
        self.include_latest_before_start = true;
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("start_ts", self.start_ts.to_string()),
            ("end_ts", self.end_ts.to_string()),
            ("period_interval", self.period_interval.to_string()),
        ];
        if self.include_latest_before_start {
            pairs.push(("include_latest_before_start", "true".to_string()));
        }
        pairs
    }
}
