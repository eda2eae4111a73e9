//! Derivation: FlattenedCandlestick → AnalysisRecord.

use rust_decimal::Decimal;

use super::{AnalysisRecord, Candlestick, CandlestickError, FlattenedCandlestick};
use crate::shared::dollars::{parse_dollars, parse_optional_dollars, to_f64, DollarsError};
use crate::shared::PeriodInterval;

fn optional_f64(field: &'static str, value: &Option<String>) -> Result<Option<f64>, DollarsError> {
    parse_optional_dollars(field, value.as_deref())?
        .map(|d| to_f64(field, d))
        .transpose()
}

/// Derive one analysis bar from a flattened candlestick.
///
/// All numbers come from the `*_dollars` / `*_fp` strings. `spread` and
/// `midprice` are computed on exact decimals before conversion.
pub fn derive(
    flat: &FlattenedCandlestick,
    interval: PeriodInterval,
) -> Result<AnalysisRecord, CandlestickError> {
    let end_ts = flat.end_period_ts;
    let start_ts = end_ts
        .checked_sub(interval.seconds())
        .ok_or(CandlestickError::Overflow("start_ts"))?;

    let bid = parse_dollars("yes_bid_close_dollars", &flat.yes_bid_close_dollars)?;
    let ask = parse_dollars("yes_ask_close_dollars", &flat.yes_ask_close_dollars)?;
    let volume = parse_dollars("volume_fp", &flat.volume_fp)?;
    let open_interest = parse_dollars("open_interest_fp", &flat.open_interest_fp)?;

    let spread = ask
        .checked_sub(bid)
        .ok_or(CandlestickError::Overflow("spread"))?;
    let midprice = ask
        .checked_add(bid)
        .and_then(|sum| sum.checked_div(Decimal::from(2)))
        .ok_or(CandlestickError::Overflow("midprice"))?;

    Ok(AnalysisRecord {
        start_ts,
        end_ts,
        open: optional_f64("price_open_dollars", &flat.price_open_dollars)?,
        high: optional_f64("price_high_dollars", &flat.price_high_dollars)?,
        low: optional_f64("price_low_dollars", &flat.price_low_dollars)?,
        close: optional_f64("price_close_dollars", &flat.price_close_dollars)?,
        volume: to_f64("volume_fp", volume)?,
        ask: to_f64("yes_ask_close_dollars", ask)?,
        bid: to_f64("yes_bid_close_dollars", bid)?,
        spread: to_f64("spread", spread)?,
        midprice: to_f64("midprice", midprice)?,
        open_interest: to_f64("open_interest_fp", open_interest)?,
    })
}

/// Derive a bar for every row, preserving order. Rows are independent.
pub fn derive_all(
    flats: &[FlattenedCandlestick],
    interval: PeriodInterval,
) -> Result<Vec<AnalysisRecord>, CandlestickError> {
    flats.iter().map(|flat| derive(flat, interval)).collect()
}

/// Flatten then derive a whole series in one pass.
pub fn analyze(
    candlesticks: Vec<Candlestick>,
    interval: PeriodInterval,
) -> Result<Vec<AnalysisRecord>, CandlestickError> {
    let flats = super::flatten_all(candlesticks);
    let records = derive_all(&flats, interval)?;
    tracing::debug!(
        bars = records.len(),
        interval_minutes = interval.as_minutes(),
        "Derived analysis records"
    );
    Ok(records)
}
