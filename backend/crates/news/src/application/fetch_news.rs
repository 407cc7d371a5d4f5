//! Fetch News Use Case
//!
//! Resolves the query, calls the provider, and retries a city search once as
//! a general-category feed when it comes back empty.

use std::sync::Arc;

use crate::application::config::NewsConfig;
use crate::domain::article::Article;
use crate::domain::category::NewsCategory;
use crate::domain::provider::NewsProvider;
use crate::domain::query::{HeadlineQuery, HeadlineRequest};
use crate::error::{NewsError, NewsResult};

/// Fetch news input (raw query-string values)
#[derive(Debug, Default)]
pub struct FetchNewsInput {
    pub category: Option<String>,
    pub city: Option<String>,
}

/// Fetch news use case
pub struct FetchNewsUseCase<P>
where
    P: NewsProvider,
{
    provider: Arc<P>,
    config: Arc<NewsConfig>,
}

impl<P> FetchNewsUseCase<P>
where
    P: NewsProvider,
{
    pub fn new(provider: Arc<P>, config: Arc<NewsConfig>) -> Self {
        Self { provider, config }
    }

    pub async fn execute(&self, input: FetchNewsInput) -> NewsResult<Vec<Article>> {
        let api_key = self.config.api_key().ok_or(NewsError::MissingApiKey)?;

        let query = HeadlineQuery::from_params(input.category.as_deref(), input.city.as_deref());
        let articles = self
            .provider
            .fetch_headlines(&self.request(api_key, query.clone()))
            .await?;

        match &query {
            HeadlineQuery::Keyword(city) if articles.is_empty() => {
                tracing::info!(city = %city, "No results for city, falling back to general news");

                let fallback = HeadlineQuery::Category(NewsCategory::General);
                self.provider
                    .fetch_headlines(&self.request(api_key, fallback))
                    .await
            }
            _ => {
                tracing::debug!(count = articles.len(), query = ?query, "News fetched");
                Ok(articles)
            }
        }
    }

    fn request(&self, api_key: &str, query: HeadlineQuery) -> HeadlineRequest {
        HeadlineRequest {
            api_key: api_key.to_string(),
            page_size: self.config.page_size,
            query,
        }
    }
}
