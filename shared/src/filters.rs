//! List query filters
//!
//! Serialized as URL query parameters; unset fields are omitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use urlencoding::encode;

use crate::models::StatusCode;

/// Filters applied to a list request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListFilters {
    pub search: Option<String>,
    /// Page number (1-based)
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub status: Option<StatusCode>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Foreign-key filters (`client_id`, `insurer_id`, `brand_id`, ...)
    #[serde(default)]
    pub relations: BTreeMap<String, i64>,
}

impl ListFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text; blank text clears it
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page.max(1));
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_date_range(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn with_relation(mut self, key: impl Into<String>, id: i64) -> Self {
        self.relations.insert(key.into(), id);
        self
    }

    /// Query pairs in a stable order
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("start_date".to_string(), start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end_date".to_string(), end.format("%Y-%m-%d").to_string()));
        }
        for (key, id) in &self.relations {
            pairs.push((key.clone(), id.to_string()));
        }
        pairs
    }

    /// Encoded query string including the leading `?`, or empty
    pub fn to_query_string(&self) -> String {
        let pairs = self.to_pairs();
        if pairs.is_empty() {
            return String::new();
        }
        let encoded: Vec<String> = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect();
        format!("?{}", encoded.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_filters_produce_no_query() {
        assert_eq!(ListFilters::new().to_query_string(), "");
    }

    #[test]
    fn test_query_string_is_encoded_and_ordered() {
        let filters = ListFilters::new()
            .with_search("  Société Générale ")
            .with_page(2)
            .with_per_page(25)
            .with_status(StatusCode::Active)
            .with_date_range(NaiveDate::from_ymd_opt(2024, 1, 1), None)
            .with_relation("insurer_id", 4)
            .with_relation("client_id", 9);

        assert_eq!(
            filters.to_query_string(),
            "?search=Soci%C3%A9t%C3%A9%20G%C3%A9n%C3%A9rale&page=2&per_page=25&status=active\
             &start_date=2024-01-01&client_id=9&insurer_id=4"
        );
    }

    #[test]
    fn test_blank_search_is_cleared() {
        let filters = ListFilters::new().with_search("abc").with_search("   ");
        assert_eq!(filters.search, None);
    }

    #[test]
    fn test_page_zero_is_clamped() {
        assert_eq!(ListFilters::new().with_page(0).page, Some(1));
    }
}
