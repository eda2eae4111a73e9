//! Wire types for series responses (REST).

use super::Series;
use serde::{Deserialize, Serialize};

/// Response for `GET /series/{ticker}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesResponse {
    pub series: Series,
}

/// Query parameters for `GET /series`.
#[derive(Debug, Clone, Default)]
pub struct SeriesListParams {
    pub category: Option<String>,
    pub tags: Vec<String>,
}

impl SeriesListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(c) = &self.category {
            pairs.push(("category", c.clone()));
        }
        if !self.tags.is_empty() {
            pairs.push(("tags", self.tags.join(",")));
        }
        pairs
    }
}
