//! Shared newtypes and utilities used across all domain modules.
//!
//! The ticker newtypes are serialization-transparent: they serialize/deserialize
//! identically to the raw strings the API sends, so they can be used directly in
//! request paths and wire types without conversion overhead.

pub mod dollars;
pub mod time;

pub use dollars::{parse_dollars, parse_optional_dollars, DollarsError};
pub use time::{earliest_open_ts, iso_to_unix, latest_close_ts, unix_to_datestr};

use crate::domain::candlestick::CandlestickError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── Tickers ─────────────────────────────────────────────────────────────────

macro_rules! ticker_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name(s.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok($name(s))
            }
        }
    };
}

ticker_newtype!(
    /// Series ticker (e.g. `"KXHIGHNY"`).
    SeriesTicker
);

ticker_newtype!(
    /// Event ticker (e.g. `"KXHIGHNY-25JAN01"`).
    EventTicker
);

ticker_newtype!(
    /// Market ticker (e.g. `"KXHIGHNY-25JAN01-B45.5"`).
    MarketTicker
);

// ─── PeriodInterval ──────────────────────────────────────────────────────────

/// Candlestick bucket length. Kalshi only serves these three sizes.
///
/// On the wire (query strings and JSON) the interval is its length in minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum PeriodInterval {
    Minute,
    #[default]
    Hour,
    Day,
}

impl PeriodInterval {
    pub fn as_minutes(&self) -> u32 {
        match self {
            Self::Minute => 1,
            Self::Hour => 60,
            Self::Day => 1440,
        }
    }

    /// Duration of one bucket in seconds.
    pub fn seconds(&self) -> i64 {
        i64::from(self.as_minutes()) * 60
    }
}

impl TryFrom<u32> for PeriodInterval {
    type Error = CandlestickError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        match minutes {
            1 => Ok(Self::Minute),
            60 => Ok(Self::Hour),
            1440 => Ok(Self::Day),
            other => Err(CandlestickError::UnsupportedInterval(other)),
        }
    }
}

impl From<PeriodInterval> for u32 {
    fn from(interval: PeriodInterval) -> Self {
        interval.as_minutes()
    }
}

impl FromStr for PeriodInterval {
    type Err = CandlestickError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let minutes: u32 = s
            .trim()
            .parse()
            .map_err(|_| CandlestickError::Malformed(format!("invalid period interval '{}'", s)))?;
        Self::try_from(minutes)
    }
}

impl std::fmt::Display for PeriodInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_minutes())
    }
}
