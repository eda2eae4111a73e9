//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain records as the API defines them
//! - `wire.rs` — Response envelopes and query parameters
//! - `client.rs` — Sub-client with HTTP methods
//!
//! `candlestick` additionally holds the flatten (`convert.rs`) and
//! analysis (`analysis.rs`) transforms.

pub mod candlestick;
pub mod event;
pub mod market;
pub mod series;
