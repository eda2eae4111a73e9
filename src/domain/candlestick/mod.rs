//! Candlestick domain — OHLC time series for a market, and their
//! flattened and analysis-ready forms.
//!
//! The pipeline is pure and single-pass:
//!
//! ```text
//! Candlestick ──flatten──▶ FlattenedCandlestick ──derive──▶ AnalysisRecord
//! ```

mod analysis;
#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

pub use analysis::{analyze, derive, derive_all};
pub use convert::{flatten, flatten_all};

use crate::shared::DollarsError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// Errors raised by the candlestick pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CandlestickError {
    /// Input did not have the candlestick shape (e.g. missing `yes_bid`).
    #[error("Malformed candlestick: {0}")]
    Malformed(String),

    #[error("Invalid decimal '{value}' in {field}: {reason}")]
    InvalidDecimal {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// A derived value does not fit the numeric range (e.g. `ask + bid`).
    #[error("Arithmetic overflow computing {0}")]
    Overflow(&'static str),

    /// Only 1, 60 and 1440 minute buckets exist.
    #[error("Unsupported period interval: {0} minutes (expected 1, 60 or 1440)")]
    UnsupportedInterval(u32),
}

impl From<DollarsError> for CandlestickError {
    fn from(e: DollarsError) -> Self {
        CandlestickError::InvalidDecimal {
            field: e.field,
            value: e.value,
            reason: e.reason,
        }
    }
}

// ─── Candlestick ─────────────────────────────────────────────────────────────

/// Open/low/high/close of a quote series, in cents and in dollars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandlestickOhlc {
    pub open: i64,
    pub open_dollars: String,
    pub low: i64,
    pub low_dollars: String,
    pub high: i64,
    pub high_dollars: String,
    pub close: i64,
    pub close_dollars: String,
}

/// OHLC of traded prices plus mean/previous/min/max.
///
/// Every field is absent when nothing traded during the period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandlestickPriceOhlc {
    #[serde(default)]
    pub open: Option<i64>,
    #[serde(default)]
    pub open_dollars: Option<String>,
    #[serde(default)]
    pub low: Option<i64>,
    #[serde(default)]
    pub low_dollars: Option<String>,
    #[serde(default)]
    pub high: Option<i64>,
    #[serde(default)]
    pub high_dollars: Option<String>,
    #[serde(default)]
    pub close: Option<i64>,
    #[serde(default)]
    pub close_dollars: Option<String>,
    /// Mean traded price.
    #[serde(default)]
    pub mean: Option<i64>,
    #[serde(default)]
    pub mean_dollars: Option<String>,
    /// Last traded price before the period began.
    #[serde(default)]
    pub previous: Option<i64>,
    #[serde(default)]
    pub previous_dollars: Option<String>,
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub min_dollars: Option<String>,
    #[serde(default)]
    pub max: Option<i64>,
    #[serde(default)]
    pub max_dollars: Option<String>,
}

/// One time bucket of bid, ask and traded-price activity for a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candlestick {
    /// Inclusive end of the period, Unix seconds.
    pub end_period_ts: i64,
    pub yes_bid: CandlestickOhlc,
    pub yes_ask: CandlestickOhlc,
    pub price: CandlestickPriceOhlc,
    /// Contracts traded during the period.
    pub volume: i64,
    pub volume_fp: String,
    /// Contracts outstanding at the end of the period.
    pub open_interest: i64,
    pub open_interest_fp: String,
}

impl Candlestick {
    /// Decode one candlestick from JSON, naming the offending field on failure.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, CandlestickError> {
        Candlestick::deserialize(value).map_err(|e| CandlestickError::Malformed(e.to_string()))
    }
}

/// Decode a JSON array of candlesticks. Fails on the first malformed element.
pub fn parse_candlesticks(value: &serde_json::Value) -> Result<Vec<Candlestick>, CandlestickError> {
    let items = value
        .as_array()
        .ok_or_else(|| CandlestickError::Malformed("expected a JSON array".to_string()))?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Candlestick::from_json(item)
                .map_err(|e| CandlestickError::Malformed(format!("element {}: {}", i, e)))
        })
        .collect()
}

// ─── FlattenedCandlestick ────────────────────────────────────────────────────

/// A [`Candlestick`] with its three OHLC sub-records inlined under
/// `yes_bid_*`, `yes_ask_*` and `price_*` names, one flat row per bucket.
///
/// Serializes to exactly 37 keys; absent `price_*` values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenedCandlestick {
    pub end_period_ts: i64,

    pub yes_bid_open: i64,
    pub yes_bid_open_dollars: String,
    pub yes_bid_low: i64,
    pub yes_bid_low_dollars: String,
    pub yes_bid_high: i64,
    pub yes_bid_high_dollars: String,
    pub yes_bid_close: i64,
    pub yes_bid_close_dollars: String,

    pub yes_ask_open: i64,
    pub yes_ask_open_dollars: String,
    pub yes_ask_low: i64,
    pub yes_ask_low_dollars: String,
    pub yes_ask_high: i64,
    pub yes_ask_high_dollars: String,
    pub yes_ask_close: i64,
    pub yes_ask_close_dollars: String,

    pub price_open: Option<i64>,
    pub price_open_dollars: Option<String>,
    pub price_low: Option<i64>,
    pub price_low_dollars: Option<String>,
    pub price_high: Option<i64>,
    pub price_high_dollars: Option<String>,
    pub price_close: Option<i64>,
    pub price_close_dollars: Option<String>,
    pub price_mean: Option<i64>,
    pub price_mean_dollars: Option<String>,
    pub price_previous: Option<i64>,
    pub price_previous_dollars: Option<String>,
    pub price_min: Option<i64>,
    pub price_min_dollars: Option<String>,
    pub price_max: Option<i64>,
    pub price_max_dollars: Option<String>,

    pub volume: i64,
    pub volume_fp: String,
    pub open_interest: i64,
    pub open_interest_fp: String,
}

// ─── AnalysisRecord ──────────────────────────────────────────────────────────

/// One bar ready for technical analysis.
///
/// `open`/`high`/`low`/`close` come from traded prices and are `None` for a
/// period without trades. Bid and ask are always quoted, so `spread` and
/// `midprice` are always defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub start_ts: i64,
    pub end_ts: i64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: f64,
    pub ask: f64,
    pub bid: f64,
    pub spread: f64,
    pub midprice: f64,
    pub open_interest: f64,
}

impl AnalysisRecord {
    /// Whether any trade happened during the bar.
    pub fn has_trades(&self) -> bool {
        self.open.is_some() && self.high.is_some() && self.low.is_some() && self.close.is_some()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    fn ohlc(open: &str, low: &str, high: &str, close: &str) -> CandlestickOhlc {
        let cents = |d: &str| (d.parse::<f64>().unwrap() * 100.0).round() as i64;
        CandlestickOhlc {
            open: cents(open),
            open_dollars: open.to_string(),
            low: cents(low),
            low_dollars: low.to_string(),
            high: cents(high),
            high_dollars: high.to_string(),
            close: cents(close),
            close_dollars: close.to_string(),
        }
    }

    /// The hourly bar ending at 1700003600 with bid 0.42 / ask 0.45 and trades.
    pub(crate) fn traded_candlestick(end_period_ts: i64) -> Candlestick {
        Candlestick {
            end_period_ts,
            yes_bid: ohlc("0.40", "0.39", "0.43", "0.42"),
            yes_ask: ohlc("0.43", "0.42", "0.47", "0.45"),
            price: CandlestickPriceOhlc {
                open: Some(41),
                open_dollars: Some("0.41".to_string()),
                low: Some(40),
                low_dollars: Some("0.40".to_string()),
                high: Some(46),
                high_dollars: Some("0.46".to_string()),
                close: Some(44),
                close_dollars: Some("0.44".to_string()),
                mean: Some(43),
                mean_dollars: Some("0.43".to_string()),
                previous: Some(40),
                previous_dollars: Some("0.40".to_string()),
                min: Some(40),
                min_dollars: Some("0.40".to_string()),
                max: Some(46),
                max_dollars: Some("0.46".to_string()),
            },
            volume: 120,
            volume_fp: "120.5".to_string(),
            open_interest: 300,
            open_interest_fp: "300.0".to_string(),
        }
    }

    /// A bar in which nothing traded: every `price` field is absent.
    pub(crate) fn quiet_candlestick(end_period_ts: i64) -> Candlestick {
        Candlestick {
            price: CandlestickPriceOhlc::default(),
            volume: 0,
            volume_fp: "0.00".to_string(),
            ..traded_candlestick(end_period_ts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_no_trade_period() {
        let value = json!({
            "end_period_ts": 1700003600,
            "yes_bid": {"open": 40, "open_dollars": "0.4000", "low": 39, "low_dollars": "0.3900",
                        "high": 43, "high_dollars": "0.4300", "close": 42, "close_dollars": "0.4200"},
            "yes_ask": {"open": 43, "open_dollars": "0.4300", "low": 42, "low_dollars": "0.4200",
                        "high": 47, "high_dollars": "0.4700", "close": 45, "close_dollars": "0.4500"},
            "price": {"open": null, "close": null},
            "volume": 0,
            "volume_fp": "0.00",
            "open_interest": 300,
            "open_interest_fp": "300.00"
        });
        let candle = Candlestick::from_json(&value).unwrap();
        assert_eq!(candle.end_period_ts, 1_700_003_600);
        assert_eq!(candle.price, CandlestickPriceOhlc::default());
        assert_eq!(candle.yes_ask.close_dollars, "0.4500");
    }

    #[test]
    fn test_from_json_missing_yes_bid_is_malformed() {
        let mut value = serde_json::to_value(traded_candlestick(1_700_003_600)).unwrap();
        value.as_object_mut().unwrap().remove("yes_bid");
        match Candlestick::from_json(&value) {
            Err(CandlestickError::Malformed(msg)) => assert!(msg.contains("yes_bid")),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json_missing_end_period_ts_is_malformed() {
        let mut value = serde_json::to_value(traded_candlestick(1_700_003_600)).unwrap();
        value.as_object_mut().unwrap().remove("end_period_ts");
        let err = Candlestick::from_json(&value).unwrap_err();
        assert!(err.to_string().contains("end_period_ts"));
    }

    #[test]
    fn test_parse_candlesticks_reports_element() {
        let good = serde_json::to_value(traded_candlestick(1_700_003_600)).unwrap();
        let value = json!([good, {"end_period_ts": 1700007200}]);
        let err = parse_candlesticks(&value).unwrap_err();
        assert!(err.to_string().contains("element 1"));

        assert!(parse_candlesticks(&json!({"not": "an array"})).is_err());
        assert!(parse_candlesticks(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_has_trades() {
        let hour = crate::shared::PeriodInterval::Hour;
        let traded = derive(&flatten(traded_candlestick(1_700_003_600)), hour).unwrap();
        let quiet = derive(&flatten(quiet_candlestick(1_700_003_600)), hour).unwrap();
        assert!(traded.has_trades());
        assert!(!quiet.has_trades());
    }
}
