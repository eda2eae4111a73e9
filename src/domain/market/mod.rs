//! Market domain — one tradeable yes/no contract within an event.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

// ─── Market ──────────────────────────────────────────────────────────────────

/// A binary contract as returned by the markets endpoints.
///
/// Every price is carried twice: integer cents and an exact dollar string
/// (`*_dollars`). Counts are carried as an integer and a fixed-point string
/// (`*_fp`). Times are ISO-8601 strings; see [`crate::shared::time`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub ticker: String,
    pub event_ticker: String,
    /// `"binary"` or `"scalar"`.
    pub market_type: String,
    pub title: String,
    pub subtitle: String,
    pub yes_sub_title: String,
    pub no_sub_title: String,
    pub created_time: String,
    pub updated_time: String,
    pub open_time: String,
    pub close_time: String,
    pub expiration_time: String,
    pub latest_expiration_time: String,
    pub settlement_timer_seconds: i64,
    /// Lifecycle state (`"initialized"`, `"active"`, `"closed"`, `"settled"`, ...).
    pub status: String,
    pub response_price_units: String,
    pub yes_bid: i64,
    pub yes_bid_dollars: String,
    pub yes_ask: i64,
    pub yes_ask_dollars: String,
    pub no_bid: i64,
    pub no_bid_dollars: String,
    pub no_ask: i64,
    pub no_ask_dollars: String,
    pub last_price: i64,
    pub last_price_dollars: String,
    pub volume: i64,
    pub volume_fp: String,
    pub volume_24h: i64,
    pub volume_24h_fp: String,
    pub result: String,
    pub can_close_early: bool,
    pub open_interest: i64,
    pub open_interest_fp: String,
    pub notional_value: i64,
    pub notional_value_dollars: String,
    pub previous_yes_bid: i64,
    pub previous_yes_bid_dollars: String,
    pub previous_yes_ask: i64,
    pub previous_yes_ask_dollars: String,
    pub previous_price: i64,
    pub previous_price_dollars: String,
    pub liquidity: i64,
    pub liquidity_dollars: String,
    pub expiration_value: String,
    /// Minimum price increment in cents.
    pub tick_size: i64,
    pub rules_primary: String,
    pub rules_secondary: String,
    pub price_level_structure: String,
    pub price_ranges: Vec<PriceRange>,
    pub expected_expiration_time: String,
    #[serde(default)]
    pub settlement_value: Option<i64>,
    #[serde(default)]
    pub settlement_value_dollars: Option<String>,
    #[serde(default)]
    pub settlement_ts: Option<String>,
    #[serde(default)]
    pub fee_waiver_expiration_time: Option<String>,
    #[serde(default)]
    pub early_close_condition: Option<String>,
    /// `"greater"`, `"less"`, `"between"`, ...
    #[serde(default)]
    pub strike_type: Option<String>,
    #[serde(default)]
    pub floor_strike: Option<i64>,
    #[serde(default)]
    pub cap_strike: Option<i64>,
    #[serde(default)]
    pub functional_strike: Option<String>,
    #[serde(default)]
    pub custom_strike: Option<serde_json::Value>,
    #[serde(default)]
    pub mve_collection_ticker: Option<String>,
    #[serde(default)]
    pub mve_selected_legs: Option<Vec<MveSelectedLeg>>,
    #[serde(default)]
    pub primary_participant_key: Option<String>,
    #[serde(default)]
    pub is_provisional: Option<bool>,
}

/// A price band with its tick step, all as dollar strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub start: String,
    pub end: String,
    pub step: String,
}

/// One leg of a multivariate-event (combo) market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MveSelectedLeg {
    pub event_ticker: String,
    pub market_ticker: String,
    pub side: String,
    #[serde(default)]
    pub yes_settlement_value_dollars: Option<String>,
}
