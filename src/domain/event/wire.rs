//! Wire types for event responses (REST).

use super::{Event, Milestone};
use crate::domain::market::Market;
use crate::shared::SeriesTicker;
use serde::{Deserialize, Serialize};

/// Response for `GET /events/{ticker}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventResponse {
    pub event: Event,
    /// Markets of the event. Kept for compatibility; prefer `event.markets`
    /// fetched with nested markets.
    #[serde(default)]
    pub markets: Vec<Market>,
}

/// Response for `GET /events`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventsResponse {
    #[serde(default)]
    pub cursor: String,
    pub events: Vec<Event>,
    #[serde(default)]
    pub milestones: Option<Vec<Milestone>>,
}

impl EventsResponse {
    pub fn next_cursor(&self) -> Option<&str> {
        Some(self.cursor.as_str()).filter(|c| !c.is_empty())
    }
}

/// Query parameters for `GET /events`.
#[derive(Debug, Clone, Default)]
pub struct EventsParams {
    /// Page size (1-200).
    pub limit: Option<u32>,
    pub cursor: Option<String>,
    /// `"open"`, `"closed"` or `"settled"`.
    pub status: Option<String>,
    pub series_ticker: Option<SeriesTicker>,
    pub with_nested_markets: bool,
    pub with_milestones: bool,
}

impl EventsParams {
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

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_series(mut self, series_ticker: impl Into<SeriesTicker>) -> Self {
        self.series_ticker = Some(series_ticker.into());
        self
    }

    pub fn nested_markets(mut self) -> Self {
        self.with_nested_markets = true;
        self
    }

    pub fn milestones(mut self) -> Self {
        self.with_milestones = true;
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
        if let Some(s) = &self.status {
            pairs.push(("status", s.clone()));
        }
        if let Some(s) = &self.series_ticker {
            pairs.push(("series_ticker", s.to_string()));
        }
        if self.with_nested_markets {
            pairs.push(("with_nested_markets", "true".to_string()));
        }
        if self.with_milestones {
            pairs.push(("with_milestones", "true".to_string()));
        }
        pairs
    }
}
