//! HTTP client layer — `KalshiHttp`, one method per REST endpoint.

pub mod client;

pub use client::KalshiHttp;
