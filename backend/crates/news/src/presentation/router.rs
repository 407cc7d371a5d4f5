//! News Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::NewsConfig;
use crate::domain::provider::NewsProvider;
use crate::error::NewsResult;
use crate::infra::newsapi::NewsApiClient;
use crate::presentation::handlers::{self, NewsAppState};

/// Create the News router backed by the NewsAPI HTTP client
pub fn news_router(config: NewsConfig) -> NewsResult<Router> {
    let client = NewsApiClient::from_config(&config)?;
    Ok(news_router_generic(client, config))
}

/// Create a generic News router for any provider implementation
pub fn news_router_generic<P>(provider: P, config: NewsConfig) -> Router
where
    P: NewsProvider + Clone + Send + Sync + 'static,
{
    let state = NewsAppState {
        provider: Arc::new(provider),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::get_news::<P>))
        .with_state(state)
}
