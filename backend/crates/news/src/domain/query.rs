//! Headline queries
//!
//! What to ask the provider for. A city turns the request into a keyword
//! search and takes priority over any category.

use crate::domain::category::NewsCategory;

/// One upstream lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlineQuery {
    /// Free-text search (`q=<city>`), no category
    Keyword(String),
    /// Category feed
    Category(NewsCategory),
}

impl HeadlineQuery {
    /// Build from the raw `category` and `city` query values
    ///
    /// A blank city counts as absent.
    pub fn from_params(category: Option<&str>, city: Option<&str>) -> Self {
        match city.map(str::trim).filter(|c| !c.is_empty()) {
            Some(city) => HeadlineQuery::Keyword(city.to_string()),
            None => HeadlineQuery::Category(NewsCategory::normalize(category)),
        }
    }
}

/// A fully parameterized provider request
#[derive(Clone, PartialEq, Eq)]
pub struct HeadlineRequest {
    pub api_key: String,
    pub page_size: u32,
    pub query: HeadlineQuery,
}

impl HeadlineRequest {
    /// Query-string pairs in provider naming
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("apiKey", self.api_key.clone()),
            ("pageSize", self.page_size.to_string()),
        ];
        match &self.query {
            HeadlineQuery::Keyword(q) => pairs.push(("q", q.clone())),
            HeadlineQuery::Category(c) => pairs.push(("category", c.as_str().to_string())),
        }
        pairs
    }
}

impl std::fmt::Debug for HeadlineRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlineRequest")
            .field("api_key", &"[REDACTED]")
            .field("page_size", &self.page_size)
            .field("query", &self.query)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_takes_priority() {
        assert_eq!(
            HeadlineQuery::from_params(Some("cricket"), Some("Pune")),
            HeadlineQuery::Keyword("Pune".to_string())
        );
    }

    #[test]
    fn test_blank_city_is_absent() {
        assert_eq!(
            HeadlineQuery::from_params(Some("cricket"), Some("  ")),
            HeadlineQuery::Category(NewsCategory::Sports)
        );
        assert_eq!(
            HeadlineQuery::from_params(None, None),
            HeadlineQuery::Category(NewsCategory::General)
        );
    }

    #[test]
    fn test_keyword_pairs_have_no_category() {
        let request = HeadlineRequest {
            api_key: "k".to_string(),
            page_size: 40,
            query: HeadlineQuery::Keyword("Pune".to_string()),
        };
        let pairs = request.query_pairs();
        assert!(pairs.contains(&("apiKey", "k".to_string())));
        assert!(pairs.contains(&("pageSize", "40".to_string())));
        assert!(pairs.contains(&("q", "Pune".to_string())));
        assert!(pairs.iter().all(|(name, _)| *name != "category"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let request = HeadlineRequest {
            api_key: "very-secret-key".to_string(),
            page_size: 40,
            query: HeadlineQuery::Category(NewsCategory::General),
        };
        assert!(!format!("{request:?}").contains("very-secret-key"));
    }
}
