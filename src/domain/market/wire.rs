//! Wire types for market responses (REST).

use super::Market;
use crate::shared::{EventTicker, MarketTicker, SeriesTicker};
use serde::{Deserialize, Serialize};

/// Response for `GET /markets/{ticker}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketResponse {
    pub market: Market,
}

/// Response for `GET /markets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketsResponse {
    pub markets: Vec<Market>,
    /// Cursor for the next page; empty when there is none.
    #[serde(default)]
    pub cursor: String,
}

impl MarketsResponse {
    pub fn next_cursor(&self) -> Option<&str> {
        Some(self.cursor.as_str()).filter(|c| !c.is_empty())
    }
}

/// Query parameters for `GET /markets`.
#[derive(Debug, Clone, Default)]
pub struct MarketsParams {
    /// Page size (1-1000).
    pub limit: Option<u32>,
    pub cursor: Option<String>,
    pub event_ticker: Option<EventTicker>,
    pub series_ticker: Option<SeriesTicker>,
    /// `"unopened"`, `"open"`, `"closed"` or `"settled"`.
    pub status: Option<String>,
    pub tickers: Vec<MarketTicker>,
    pub min_close_ts: Option<i64>,
    pub max_close_ts: Option<i64>,
}

impl MarketsParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn with_event(mut self, event_ticker: impl Into<EventTicker>) -> Self {
        self.event_ticker = Some(event_ticker.into());
        self
    }

    pub fn with_series(mut self, series_ticker: impl Into<SeriesTicker>) -> Self {
        self.series_ticker = Some(series_ticker.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_tickers(mut self, tickers: Vec<MarketTicker>) -> Self {
        self.tickers = tickers;
        self
    }

    /// Restrict to markets closing within `[min, max]` (Unix seconds).
    pub fn with_close_range(mut self, min: i64, max: i64) -> Self {
        self.min_close_ts = Some(min);
        self.max_close_ts = Some(max);
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(l) = self.limit {
            pairs.push(("limit", l.to_string()));
        }
        if let Some(c) = &self.cursor {
            pairs.push(("cursor", c.clone()));
        }
        if let Some(e) = &self.event_ticker {
            pairs.push(("event_ticker", e.to_string()));
        }
        if let Some(s) = &self.series_ticker {
            pairs.push(("series_ticker", s.to_string()));
        }
        if let Some(s) = &self.status {
            pairs.push(("status", s.clone()));
        }
        if !self.tickers.is_empty() {
            let joined = self
                .tickers
                .iter()
                .map(MarketTicker::as_str)
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("tickers", joined));
        }
        if let Some(ts) = self.min_close_ts {
            pairs.push(("min_close_ts", ts.to_string()));
        }
        if let Some(ts) = self.max_close_ts {
            pairs.push(("max_close_ts", ts.to_string()));
        }
        pairs
    }
}
