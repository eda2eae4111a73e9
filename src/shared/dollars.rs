//! Coercion of the API's decimal-string fields into numbers.
//!
//! Every cent-denominated field on the wire has a `*_dollars` (or `*_fp`)
//! twin carrying the exact decimal value as a string. These strings are the
//! numeric source of truth; parsing goes through `rust_decimal::Decimal` so
//! that arithmetic on them stays exact until the final conversion to `f64`.

use std::fmt;

use rust_decimal::Decimal;
use std::str::FromStr;

/// A decimal-string field that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DollarsError {
    pub field: &'static str,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for DollarsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid decimal '{}' in field {}: {}",
            self.value, self.field, self.reason
        )
    }
}

impl std::error::Error for DollarsError {}

/// Parse a mandatory decimal string such as `"0.42"` or `"120.50"`.
///
/// Exponent notation (`"1e-2"`, `"4.5E-1"`) is accepted as well.
pub fn parse_dollars(field: &'static str, value: &str) -> Result<Decimal, DollarsError> {
    let text = value.trim();
    Decimal::from_str(text)
        .or_else(|e| {
            if text.contains(['e', 'E']) {
                Decimal::from_scientific(text)
            } else {
                Err(e)
            }
        })
        .map_err(|e| DollarsError {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Parse an optional decimal string. Absence stays absence, never zero.
pub fn parse_optional_dollars(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<Decimal>, DollarsError> {
    value.map(|v| parse_dollars(field, v)).transpose()
}

/// Conversion used at the edge of the analysis record.
///
/// Goes through the decimal text so the result is the `f64` nearest to the
/// exact value (`0.45 - 0.42` becomes `0.03`, not `0.030000000000000027`).
pub fn to_f64(field: &'static str, value: Decimal) -> Result<f64, DollarsError> {
    let text = value.normalize().to_string();
    text.parse::<f64>().map_err(|e| DollarsError {
        field,
        value: text.clone(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dollars() {
        assert_eq!(
            parse_dollars("yes_bid_close_dollars", "0.42").unwrap(),
            Decimal::from_str("0.42").unwrap()
        );
        assert_eq!(
            parse_dollars("volume_fp", " 120.5 ").unwrap(),
            Decimal::from_str("120.5").unwrap()
        );
    }

    #[test]
    fn test_parse_dollars_rejects_garbage() {
        let err = parse_dollars("price_open_dollars", "abc").unwrap_err();
        assert_eq!(err.field, "price_open_dollars");
        assert_eq!(err.value, "abc");
        assert!(err.to_string().contains("price_open_dollars"));
        assert!(parse_dollars("volume_fp", "").is_err());
    }

    #[test]
    fn test_optional_absent_is_none_not_zero() {
        assert_eq!(parse_optional_dollars("price_close_dollars", None).unwrap(), None);
        assert_eq!(
            parse_optional_dollars("price_close_dollars", Some("0.0000")).unwrap(),
            Some(Decimal::ZERO)
        );
    }

    #[test]
    fn test_to_f64_exact_difference() {
        let ask = Decimal::from_str("0.45").unwrap();
        let bid = Decimal::from_str("0.42").unwrap();
        assert_eq!(to_f64("spread", ask - bid).unwrap(), 0.03);
        assert_eq!(to_f64("midprice", (ask + bid) / Decimal::from(2)).unwrap(), 0.435);
        assert_eq!(to_f64("volume_fp", Decimal::from_str("120.50").unwrap()).unwrap(), 120.5);
    }

    #[test]
    fn test_parse_dollars_accepts_exponent_notation() {
        assert_eq!(
            parse_dollars("yes_bid_close_dollars", "1e-2").unwrap(),
            Decimal::from_str("0.01").unwrap()
        );
        assert_eq!(
            parse_dollars("yes_ask_close_dollars", " 4.5E-1 ").unwrap(),
            Decimal::from_str("0.45").unwrap()
        );
        assert!(parse_dollars("volume_fp", "1e").is_err());
        assert!(parse_dollars("volume_fp", "e5").is_err());
    }
}
