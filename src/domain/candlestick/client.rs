//! Candlesticks sub-client — raw OHLC history and analysis-ready bars.

use super::wire::{CandlesticksParams, EventCandlesticksResponse, MarketCandlesticksResponse};
use super::{analyze, AnalysisRecord};
use crate::client::KalshiClient;
use crate::error::SdkError;
use crate::shared::{EventTicker, MarketTicker, SeriesTicker};

/// Sub-client for candlestick operations.
pub struct Candlesticks<'a> {
    pub(crate) client: &'a KalshiClient,
}

impl<'a> Candlesticks<'a> {
    /// Candlesticks for one market.
    pub async fn market(
        &self,
        series: &SeriesTicker,
        ticker: &MarketTicker,
        params: &CandlesticksParams,
    ) -> Result<MarketCandlesticksResponse, SdkError> {
        Ok(self
            .client
            .http
            .get_market_candlesticks(series, ticker, params)
            .await?)
    }

    /// Candlesticks for every market of an event.
    pub async fn event(
        &self,
        series: &SeriesTicker,
        event: &EventTicker,
        params: &CandlesticksParams,
    ) -> Result<EventCandlesticksResponse, SdkError> {
        Ok(self
            .client
            .http
            .get_event_candlesticks(series, event, params)
            .await?)
    }

    /// Fetch a market's candlesticks and derive analysis bars for the
    /// request's period interval.
    pub async fn analysis(
        &self,
        series: &SeriesTicker,
        ticker: &MarketTicker,
        params: &CandlesticksParams,
    ) -> Result<Vec<AnalysisRecord>, SdkError> {
        let resp = self.market(series, ticker, params).await?;
        Ok(analyze(resp.candlesticks, params.period_interval)?)
    }

    /// Like [`Self::analysis`] but using the client's configured interval.
    pub async fn analysis_between(
        &self,
        series: &SeriesTicker,
        ticker: &MarketTicker,
        start_ts: i64,
        end_ts: i64,
    ) -> Result<Vec<AnalysisRecord>, SdkError> {
        let params = CandlesticksParams::new(start_ts, end_ts, self.client.period_interval);
        self.analysis(series, ticker, &params).await
    }
}
