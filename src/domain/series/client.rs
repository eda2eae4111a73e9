//! Series sub-client.

use super::wire::SeriesListParams;
use super::{Series, SeriesList, TagsByCategories};
use crate::client::KalshiClient;
use crate::error::SdkError;
use crate::shared::SeriesTicker;

/// Sub-client for series operations.
pub struct SeriesClient<'a> {
    pub(crate) client: &'a KalshiClient,
}

impl<'a> SeriesClient<'a> {
    /// Get a series by ticker (the outer `{"series": ...}` envelope is removed).
    pub async fn get(&self, ticker: &SeriesTicker) -> Result<Series, SdkError> {
        Ok(self.client.http.get_series(ticker).await?.series)
    }

    /// List series, optionally filtered by category and tags.
    pub async fn list(&self, params: &SeriesListParams) -> Result<SeriesList, SdkError> {
        Ok(self.client.http.get_series_list(params).await?)
    }

    /// Series tags grouped by category.
    pub async fn tags_by_categories(&self) -> Result<TagsByCategories, SdkError> {
        Ok(self.client.http.get_tags_by_categories().await?)
    }
}
