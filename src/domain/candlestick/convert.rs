//! Conversion: Candlestick ⇄ FlattenedCandlestick.

use super::{Candlestick, CandlestickOhlc, CandlestickPriceOhlc, FlattenedCandlestick};

impl From<Candlestick> for FlattenedCandlestick {
    fn from(source: Candlestick) -> Self {
        let Candlestick {
            end_period_ts,
            yes_bid,
            yes_ask,
            price,
            volume,
            volume_fp,
            open_interest,
            open_interest_fp,
        } = source;

        FlattenedCandlestick {
            end_period_ts,

            yes_bid_open: yes_bid.open,
            yes_bid_open_dollars: yes_bid.open_dollars,
            yes_bid_low: yes_bid.low,
            yes_bid_low_dollars: yes_bid.low_dollars,
            yes_bid_high: yes_bid.high,
            yes_bid_high_dollars: yes_bid.high_dollars,
            yes_bid_close: yes_bid.close,
            yes_bid_close_dollars: yes_bid.close_dollars,

            yes_ask_open: yes_ask.open,
            yes_ask_open_dollars: yes_ask.open_dollars,
            yes_ask_low: yes_ask.low,
            yes_ask_low_dollars: yes_ask.low_dollars,
            yes_ask_high: yes_ask.high,
            yes_ask_high_dollars: yes_ask.high_dollars,
            yes_ask_close: yes_ask.close,
            yes_ask_close_dollars: yes_ask.close_dollars,

            price_open: price.open,
            price_open_dollars: price.open_dollars,
            price_low: price.low,
            price_low_dollars: price.low_dollars,
            price_high: price.high,
            price_high_dollars: price.high_dollars,
            price_close: price.close,
            price_close_dollars: price.close_dollars,
            price_mean: price.mean,
            price_mean_dollars: price.mean_dollars,
            price_previous: price.previous,
            price_previous_dollars: price.previous_dollars,
            price_min: price.min,
            price_min_dollars: price.min_dollars,
            price_max: price.max,
            price_max_dollars: price.max_dollars,

            volume,
            volume_fp,
            open_interest,
            open_interest_fp,
        }
    }
}

impl From<FlattenedCandlestick> for Candlestick {
    fn from(flat: FlattenedCandlestick) -> Self {
        Candlestick {
            end_period_ts: flat.end_period_ts,
            yes_bid: CandlestickOhlc {
                open: flat.yes_bid_open,
                open_dollars: flat.yes_bid_open_dollars,
                low: flat.yes_bid_low,
                low_dollars: flat.yes_bid_low_dollars,
                high: flat.yes_bid_high,
                high_dollars: flat.yes_bid_high_dollars,
                close: flat.yes_bid_close,
                close_dollars: flat.yes_bid_close_dollars,
            },
            yes_ask: CandlestickOhlc {
                open: flat.yes_ask_open,
                open_dollars: flat.yes_ask_open_dollars,
                low: flat.yes_ask_low,
                low_dollars: flat.yes_ask_low_dollars,
                high: flat.yes_ask_high,
                high_dollars: flat.yes_ask_high_dollars,
                close: flat.yes_ask_close,
                close_dollars: flat.yes_ask_close_dollars,
            },
            price: CandlestickPriceOhlc {
                open: flat.price_open,
                open_dollars: flat.price_open_dollars,
                low: flat.price_low,
                low_dollars: flat.price_low_dollars,
                high: flat.price_high,
                high_dollars: flat.price_high_dollars,
                close: flat.price_close,
                close_dollars: flat.price_close_dollars,
                mean: flat.price_mean,
                mean_dollars: flat.price_mean_dollars,
                previous: flat.price_previous,
                previous_dollars: flat.price_previous_dollars,
                min: flat.price_min,
                min_dollars: flat.price_min_dollars,
                max: flat.price_max,
                max_dollars: flat.price_max_dollars,
            },
            volume: flat.volume,
            volume_fp: flat.volume_fp,
            open_interest: flat.open_interest,
            open_interest_fp: flat.open_interest_fp,
        }
    }
}

/// Flatten one candlestick into a single row.
pub fn flatten(candlestick: Candlestick) -> FlattenedCandlestick {
    candlestick.into()
}

/// Flatten a series of candlesticks, preserving order.
pub fn flatten_all(candlesticks: Vec<Candlestick>) -> Vec<FlattenedCandlestick> {
    candlesticks.into_iter().map(flatten).collect()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{quiet_candlestick, traded_candlestick};
    use super::*;

    #[test]
    fn test_flatten_prefixes_sub_records() {
        let flat = flatten(traded_candlestick(1_700_003_600));
        assert_eq!(flat.end_period_ts, 1_700_003_600);
        assert_eq!(flat.yes_bid_open, 40);
        assert_eq!(flat.yes_bid_open_dollars, "0.40");
        assert_eq!(flat.yes_bid_close_dollars, "0.42");
        assert_eq!(flat.yes_ask_high_dollars, "0.47");
        assert_eq!(flat.price_close, Some(44));
        assert_eq!(flat.price_mean_dollars.as_deref(), Some("0.43"));
        assert_eq!(flat.volume_fp, "120.5");
        assert_eq!(flat.open_interest_fp, "300.0");
    }

    #[test]
    fn test_flatten_roundtrip() {
        for candle in [traded_candlestick(1_700_003_600), quiet_candlestick(1_700_007_200)] {
            let back: Candlestick = flatten(candle.clone()).into();
            assert_eq!(back, candle);
        }
    }

    #[test]
    fn test_flatten_has_37_fields_even_without_trades() {
        for candle in [traded_candlestick(1_700_003_600), quiet_candlestick(1_700_003_600)] {
            let value = serde_json::to_value(flatten(candle)).unwrap();
            assert_eq!(value.as_object().unwrap().len(), 37);
        }
    }

    #[test]
    fn test_flatten_absent_price_stays_absent() {
        let flat = flatten(quiet_candlestick(1_700_003_600));
        assert_eq!(flat.price_open, None);
        assert_eq!(flat.price_close_dollars, None);
        assert_eq!(flat.price_previous, None);

        let value = serde_json::to_value(&flat).unwrap();
        assert!(value["price_open_dollars"].is_null());
        assert!(value.get("price_max").is_some());
    }

    #[test]
    fn test_flatten_all_preserves_order() {
        let candles: Vec<Candlestick> = (1..=4)
            .map(|i| traded_candlestick(1_700_000_000 + i * 3600))
            .collect();
        let flat = flatten_all(candles);
        let ts: Vec<i64> = flat.iter().map(|f| f.end_period_ts).collect();
        assert_eq!(ts, vec![1_700_003_600, 1_700_007_200, 1_700_010_800, 1_700_014_400]);
    }

    #[test]
    fn test_flatten_all_empty() {
        assert!(flatten_all(Vec::new()).is_empty());
    }
}
