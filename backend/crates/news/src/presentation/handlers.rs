//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use std::sync::Arc;

use crate::application::{FetchNewsInput, FetchNewsUseCase, NewsConfig};
use crate::domain::provider::NewsProvider;
use crate::error::NewsResult;
use crate::presentation::dto::{NewsQueryParams, NewsResponse};

/// Shared state for news handlers
#[derive(Clone)]
pub struct NewsAppState<P>
where
    P: NewsProvider + Clone + Send + Sync + 'static,
{
    pub provider: Arc<P>,
    pub config: Arc<NewsConfig>,
}

/// GET /api/news
pub async fn get_news<P>(
    State(state): State<NewsAppState<P>>,
    Query(params): Query<NewsQueryParams>,
) -> NewsResult<Json<NewsResponse>>
where
    P: NewsProvider + Clone + Send + Sync + 'static,
{
    let use_case = FetchNewsUseCase::new(state.provider.clone(), state.config.clone());

    let input = FetchNewsInput {
        category: params.category,
        city: params.city,
    };

    let articles = use_case.execute(input).await?;

    Ok(Json(NewsResponse::success(articles)))
}
