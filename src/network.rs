//! Network URL constants for the Kalshi trade API.

/// Default REST API base URL (v2 trade API).
pub const DEFAULT_API_URL: &str = "https://api.elections.kalshi.com/trade-api/v2";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
