//! Series domain — templates for recurring markets.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A recurring market template (e.g. daily high temperature in a city).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Unique identifier, e.g. `"KXHIGHNY"`.
    pub ticker: String,
    /// How often events occur (`"daily"`, `"weekly"`, ...).
    pub frequency: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Where the data used to settle markets comes from.
    #[serde(default)]
    pub settlement_sources: Option<Vec<SettlementSource>>,
    pub contract_url: String,
    /// Fee structure, typically `"quadratic"`.
    pub fee_type: String,
    pub fee_multiplier: f64,
    #[serde(default)]
    pub additional_prohibitions: Option<Vec<String>>,
    #[serde(default)]
    pub product_metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub volume: Option<i64>,
    #[serde(default)]
    pub volume_fp: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementSource {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Response for `GET /series`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesList {
    #[serde(default)]
    pub series: Vec<Series>,
}

/// Tags grouped by series category; a category with no tags maps to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagsByCategories {
    #[serde(alias = "tags")]
    pub tags_by_categories: BTreeMap<String, Option<Vec<String>>>,
}

impl TagsByCategories {
    /// Tags for one category; empty for unknown or tagless categories.
    pub fn tags_for(&self, category: &str) -> &[String] {
        self.tags_by_categories
            .get(category)
            .and_then(|t| t.as_deref())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERIES_JSON: &str = r#"{
        "ticker": "KXHIGHNY",
        "frequency": "daily",
        "title": "Highest temperature in NYC",
        "category": "Climate and Weather",
        "tags": ["Weather"],
        "settlement_sources": [{"name": "National Weather Service", "url": "https://www.weather.gov/"}],
        "contract_url": "https://kalshi-public-docs.s3.amazonaws.com/contract_terms/NHIGH.pdf",
        "fee_type": "quadratic",
        "fee_multiplier": 1
    }"#;

    #[test]
    fn test_series_deserialize() {
        let series: Series = serde_json::from_str(SERIES_JSON).unwrap();
        assert_eq!(series.ticker, "KXHIGHNY");
        assert_eq!(series.category, "Climate and Weather");
        assert_eq!(series.fee_multiplier, 1.0);
        assert_eq!(
            series.settlement_sources.unwrap()[0].name,
            "National Weather Service"
        );
        assert!(series.volume.is_none());
        assert!(series.product_metadata.is_none());
    }

    #[test]
    fn test_tags_by_categories() {
        let json = r#"{"tags_by_categories": {"Sports": ["Soccer", "NFL"], "Crypto": null}}"#;
        let tags: TagsByCategories = serde_json::from_str(json).unwrap();
        assert_eq!(tags.tags_for("Sports"), ["Soccer", "NFL"]);
        assert!(tags.tags_for("Crypto").is_empty());
        assert!(tags.tags_for("Unknown").is_empty());
    }

    #[test]
    fn test_tags_alias() {
        let json = r#"{"tags": {"Weather": ["Rain"]}}"#;
        let tags: TagsByCategories = serde_json::from_str(json).unwrap();
        assert_eq!(tags.tags_for("Weather"), ["Rain"]);
    }
}
