//! Markets sub-client — list and fetch markets.

use super::wire::{MarketsParams, MarketsResponse};
use super::Market;
use crate::client::KalshiClient;
use crate::error::SdkError;
use crate::shared::MarketTicker;

/// Sub-client for market operations.
pub struct Markets<'a> {
    pub(crate) client: &'a KalshiClient,
}

impl<'a> Markets<'a> {
    /// Get a single market by ticker.
    pub async fn get(&self, ticker: &MarketTicker) -> Result<Market, SdkError> {
        Ok(self.client.http.get_market(ticker).await?.market)
    }

    /// List one page of markets. Follow [`MarketsResponse::next_cursor`] for more.
    pub async fn list(&self, params: &MarketsParams) -> Result<MarketsResponse, SdkError> {
        Ok(self.client.http.get_markets(params).await?)
    }
}
