//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::article::Article;

/// `GET /api/news?category=&city=`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsQueryParams {
    pub category: Option<String>,
    pub city: Option<String>,
}

/// Envelope for both outcomes
#[derive(Debug, Clone, Serialize)]
pub struct NewsResponse {
    /// `"ok"` or `"error"`
    pub status: &'static str,
    pub message: String,
    pub articles: Vec<Article>,
}

impl NewsResponse {
    pub fn success(articles: Vec<Article>) -> Self {
        let message = if articles.is_empty() {
            "No news found for the current selection."
        } else {
            "News data fetched successfully"
        };

        Self {
            status: "ok",
            message: message.to_string(),
            articles,
        }
    }

    pub fn failure(message: String) -> Self {
        Self {
            status: "error",
            message,
            articles: Vec::new(),
        }
    }
}
