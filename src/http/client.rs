//! Low-level HTTP client — `KalshiHttp`.
//!
//! One method per API endpoint. Returns wire types; unwrapping envelopes
//! and running the candlestick pipeline happens in the Layer 3 sub-clients.
//! Every call is a single attempt: no retries, no auth headers, no cursor
//! following.

use crate::domain::candlestick::wire::{
    CandlesticksParams, EventCandlesticksResponse, MarketCandlesticksResponse,
};
use crate::domain::event::wire::{EventResponse, EventsParams, EventsResponse};
use crate::domain::market::wire::{MarketResponse, MarketsParams, MarketsResponse};
use crate::domain::series::wire::{SeriesListParams, SeriesResponse};
use crate::domain::series::{SeriesList, TagsByCategories};
use crate::error::HttpError;
use crate::network::DEFAULT_TIMEOUT_SECS;
use crate::shared::{EventTicker, MarketTicker, SeriesTicker};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the Kalshi REST API.
#[derive(Clone)]
pub struct KalshiHttp {
    base_url: String,
    client: Client,
}

impl KalshiHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Series ───────────────────────────────────────────────────────────

    pub async fn get_series(&self, ticker: &SeriesTicker) -> Result<SeriesResponse, HttpError> {
        let url = self.url(&format!("/series/{}", encode(ticker.as_str())), &[]);
        self.get(&url).await
    }

    pub async fn get_series_list(
        &self,
        params: &SeriesListParams,
    ) -> Result<SeriesList, HttpError> {
        let url = self.url("/series", &params.query_pairs());
        self.get(&url).await
    }

    pub async fn get_tags_by_categories(&self) -> Result<TagsByCategories, HttpError> {
        let url = self.url("/search/tags_by_categories", &[]);
        self.get(&url).await
    }

    // ── Events ───────────────────────────────────────────────────────────

    pub async fn get_events(&self, params: &EventsParams) -> Result<EventsResponse, HttpError> {
        let url = self.url("/events", &params.query_pairs());
        self.get(&url).await
    }

    pub async fn get_event(
        &self,
        ticker: &EventTicker,
        with_nested_markets: bool,
    ) -> Result<EventResponse, HttpError> {
        let mut query = Vec::new();
        if with_nested_markets {
            query.push(("with_nested_markets", "true".to_string()));
        }
        let url = self.url(&format!("/events/{}", encode(ticker.as_str())), &query);
        self.get(&url).await
    }

    // ── Markets ──────────────────────────────────────────────────────────

    pub async fn get_markets(&self, params: &MarketsParams) -> Result<MarketsResponse, HttpError> {
        let url = self.url("/markets", &params.query_pairs());
        self.get(&url).await
    }

    pub async fn get_market(&self, ticker: &MarketTicker) -> Result<MarketResponse, HttpError> {
        let url = self.url(&format!("/markets/{}", encode(ticker.as_str())), &[]);
        self.get(&url).await
    }

    // ── Candlesticks ─────────────────────────────────────────────────────

    pub async fn get_market_candlesticks(
        &self,
        series: &SeriesTicker,
        ticker: &MarketTicker,
        params: &CandlesticksParams,
    ) -> Result<MarketCandlesticksResponse, HttpError> {
        let path = format!(
            "/series/{}/markets/{}/candlesticks",
            encode(series.as_str()),
            encode(ticker.as_str())
        );
        let url = self.url(&path, &params.query_pairs());
        self.get(&url).await
    }

    pub async fn get_event_candlesticks(
        &self,
        series: &SeriesTicker,
        event: &EventTicker,
        params: &CandlesticksParams,
    ) -> Result<EventCandlesticksResponse, HttpError> {
        let path = format!(
            "/series/{}/events/{}/candlesticks",
            encode(series.as_str()),
            encode(event.as_str())
        );
        // The event endpoint has no synthetic leading bar.
        let query: Vec<_> = params
            .query_pairs()
            .into_iter()
            .filter(|(k, _)| *k != "include_latest_before_start")
            .collect();
        let url = self.url(&path, &query);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    fn url(&self, path: &str, query: &[(&'static str, String)]) -> String {
        build_url(&self.base_url, path, query)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);

        let resp = self.client.get(url).send().await?;
        let status = resp.status();

        if status.is_success() {
            let bytes = resp.bytes().await?;
            return serde_json::from_slice::<T>(&bytes).map_err(|e| HttpError::Decode {
                url: url.to_string(),
                reason: e.to_string(),
            });
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status_code, "Request to {} failed", url);

        Err(HttpError::from_status(status_code, body_text))
    }
}

fn encode(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Join base URL, path and percent-encoded query pairs.
pub(crate) fn build_url(base_url: &str, path: &str, query: &[(&'static str, String)]) -> String {
    let mut url = format!("{}{}", base_url, path);
    if !query.is_empty() {
        let params: Vec<String> = query
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect();
        url = format!("{}?{}", url, params.join("&"));
    }
    url
}
