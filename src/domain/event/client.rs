//! Events sub-client.

use super::wire::{EventResponse, EventsParams, EventsResponse};
use crate::client::KalshiClient;
use crate::error::SdkError;
use crate::shared::EventTicker;

/// Sub-client for event operations.
pub struct Events<'a> {
    pub(crate) client: &'a KalshiClient,
}

impl<'a> Events<'a> {
    /// Get an event, optionally with its markets nested inside `event.markets`.
    pub async fn get(
        &self,
        ticker: &EventTicker,
        with_nested_markets: bool,
    ) -> Result<EventResponse, SdkError> {
        Ok(self.client.http.get_event(ticker, with_nested_markets).await?)
    }

    /// List one page of events. Follow [`EventsResponse::next_cursor`] for more.
    pub async fn list(&self, params: &EventsParams) -> Result<EventsResponse, SdkError> {
        Ok(self.client.http.get_events(params).await?)
    }
}
