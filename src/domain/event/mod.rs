//! Event domain — one concrete occurrence of a series.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::domain::market::Market;
use serde::{Deserialize, Serialize};

/// A concrete occurrence of a series (e.g. the NYC high on a given date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_ticker: String,
    pub series_ticker: String,
    pub title: String,
    pub sub_title: String,
    /// How collateral is returned (e.g. `"binary"`).
    pub collateral_return_type: String,
    /// When true at most one market in the event can resolve yes.
    pub mutually_exclusive: bool,
    pub category: String,
    #[serde(default)]
    pub available_on_brokers: bool,
    #[serde(default)]
    pub product_metadata: Option<serde_json::Value>,
    /// Mutually exclusive with `strike_period`.
    #[serde(default)]
    pub strike_date: Option<String>,
    /// e.g. `"week"`, `"month"`.
    #[serde(default)]
    pub strike_period: Option<String>,
    /// Only present when requested with `with_nested_markets=true`.
    #[serde(default)]
    pub markets: Option<Vec<Market>>,
}

/// A scheduled real-world occurrence linked to one or more events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub category: String,
    #[serde(rename = "type")]
    pub milestone_type: String,
    pub start_date: String,
    pub related_event_tickers: Vec<String>,
    pub title: String,
    pub notification_message: String,
    pub details: serde_json::Value,
    pub primary_event_tickers: Vec<String>,
    pub last_updated_ts: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub source_id: Option<String>,
}
