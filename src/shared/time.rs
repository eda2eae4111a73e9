//! Timestamp helpers for the API's ISO-8601 strings and Unix-second fields.

use chrono::{DateTime, Utc};

use crate::domain::market::Market;
use crate::error::SdkError;

/// Convert an RFC 3339 timestamp (`2025-01-01T15:00:00Z`) to Unix seconds.
pub fn iso_to_unix(iso: &str) -> Result<i64, SdkError> {
    DateTime::parse_from_rfc3339(iso.trim())
        .map(|dt| dt.timestamp())
        .map_err(|e| SdkError::Validation(format!("Invalid timestamp '{}': {}", iso, e)))
}

/// Format Unix seconds as a `YYYY-MM-DD HH:MM` UTC label for chart axes.
pub fn unix_to_datestr(ts: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(ts, 0).map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

/// Earliest `open_time` across markets, in Unix seconds.
///
/// Used as the `start_ts` bound when requesting candlesticks for an event.
pub fn earliest_open_ts(markets: &[Market]) -> Result<i64, SdkError> {
    markets
        .iter()
        .map(|m| iso_to_unix(&m.open_time))
        .try_fold(None, |acc: Option<i64>, ts| {
            let ts = ts?;
            Ok::<_, SdkError>(Some(acc.map_or(ts, |a| a.min(ts))))
        })?
        .ok_or_else(|| SdkError::Validation("No markets to take an open time from".to_string()))
}

/// Latest `close_time` across markets, in Unix seconds.
pub fn latest_close_ts(markets: &[Market]) -> Result<i64, SdkError> {
    markets
        .iter()
        .map(|m| iso_to_unix(&m.close_time))
        .try_fold(None, |acc: Option<i64>, ts| {
            let ts = ts?;
            Ok::<_, SdkError>(Some(acc.map_or(ts, |a| a.max(ts))))
        })?
        .ok_or_else(|| SdkError::Validation("No markets to take a close time from".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::test_support::market_fixture;

    #[test]
    fn test_iso_to_unix() {
        assert_eq!(iso_to_unix("2023-11-14T22:13:20Z").unwrap(), 1_700_000_000);
        assert_eq!(
            iso_to_unix("2023-11-14T17:13:20-05:00").unwrap(),
            1_700_000_000
        );
        assert!(iso_to_unix("yesterday").is_err());
    }

    #[test]
    fn test_unix_to_datestr() {
        assert_eq!(
            unix_to_datestr(1_700_003_600).as_deref(),
            Some("2023-11-14 23:13")
        );
    }

    #[test]
    fn test_market_time_range() {
        let mut a = market_fixture("KXHIGHNY-25JAN01-B45.5");
        a.open_time = "2025-01-01T10:00:00Z".to_string();
        a.close_time = "2025-01-02T05:00:00Z".to_string();
        let mut b = market_fixture("KXHIGHNY-25JAN01-B47.5");
        b.open_time = "2025-01-01T09:00:00Z".to_string();
        b.close_time = "2025-01-02T04:00:00Z".to_string();

        let markets = vec![a, b];
        assert_eq!(
            earliest_open_ts(&markets).unwrap(),
            iso_to_unix("2025-01-01T09:00:00Z").unwrap()
        );
        assert_eq!(
            latest_close_ts(&markets).unwrap(),
            iso_to_unix("2025-01-02T05:00:00Z").unwrap()
        );
    }

    #[test]
    fn test_market_time_range_empty() {
        assert!(matches!(earliest_open_ts(&[]), Err(SdkError::Validation(_))));
        assert!(matches!(latest_close_ts(&[]), Err(SdkError::Validation(_))));
    }

    #[test]
    fn test_market_time_range_bad_timestamp() {
        let mut m = market_fixture("KXHIGHNY-25JAN01-B45.5");
        m.open_time = "not a time".to_string();
        assert!(earliest_open_ts(&[m]).is_err());
    }
}
