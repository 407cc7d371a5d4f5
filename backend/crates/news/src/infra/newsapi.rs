//! NewsAPI HTTP Client
//!
//! Reqwest implementation of [`NewsProvider`] against a top-headlines
//! endpoint. Owns transport only: query encoding, timeout, status mapping and
//! JSON decoding.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::application::config::NewsConfig;
use crate::domain::article::Article;
use crate::domain::provider::NewsProvider;
use crate::domain::query::HeadlineRequest;
use crate::error::{NewsError, NewsResult};

/// Success body; `articles` may be absent
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeadlinesBody {
    #[serde(default)]
    articles: Option<Vec<Article>>,
}

/// Error body, e.g. `{"status":"error","code":"apiKeyInvalid","message":"..."}`
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// HTTP client for the provider
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: Client,
    endpoint: Url,
}

impl NewsApiClient {
    pub fn new(endpoint: Url, timeout: Duration) -> NewsResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("news-proxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NewsError::Setup(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &NewsConfig) -> NewsResult<Self> {
        let endpoint = Url::parse(&config.base_url)
            .map_err(|e| NewsError::Setup(format!("Invalid news base URL: {e}")))?;
        Self::new(endpoint, config.request_timeout)
    }
}

impl NewsProvider for NewsApiClient {
    async fn fetch_headlines(&self, request: &HeadlineRequest) -> NewsResult<Vec<Article>> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(NewsError::transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(NewsError::transport)?;

        if !status.is_success() {
            return Err(map_status_error(status.as_u16(), &body, status.canonical_reason()));
        }

        let decoded: HeadlinesBody = serde_json::from_slice(&body)
            .map_err(|e| NewsError::InvalidResponse(e.to_string()))?;

        Ok(decoded.articles.unwrap_or_default())
    }
}

fn map_status_error(status: u16, body: &[u8], reason: Option<&str>) -> NewsError {
    let parsed = serde_json::from_slice::<ProviderErrorBody>(body).ok();

    if let Some(code) = parsed.as_ref().and_then(|b| b.code.as_deref()) {
        tracing::debug!(status, code, "News provider error code");
    }

    let detail = parsed
        .and_then(|b| b.message)
        .or_else(|| reason.map(str::to_string))
        .unwrap_or_else(|| format!("Request failed with status code {status}"));

    NewsError::Upstream { status, detail }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::NewsCategory;
    use crate::domain::query::HeadlineQuery;
    use axum::extract::{Query, State};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::{Json, Router, routing::get};
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<HashMap<String, String>>>>;

    /// Serve `reply` on an ephemeral port, recording query strings
    async fn fake_provider(
        reply: (StatusCode, serde_json::Value),
    ) -> (NewsApiClient, Seen) {
        let seen: Seen = Arc::default();

        async fn handler(
            State((seen, reply)): State<(Seen, (StatusCode, serde_json::Value))>,
            Query(params): Query<HashMap<String, String>>,
        ) -> impl IntoResponse {
            seen.lock().unwrap().push(params);
            (reply.0, Json(reply.1))
        }

        let app = Router::new()
            .route("/v2/top-headlines", get(handler))
            .with_state((seen.clone(), reply));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let endpoint = Url::parse(&format!("http://{addr}/v2/top-headlines")).unwrap();
        let client = NewsApiClient::new(endpoint, Duration::from_secs(5)).unwrap();
        (client, seen)
    }

    fn request(query: HeadlineQuery) -> HeadlineRequest {
        HeadlineRequest {
            api_key: "test-key".to_string(),
            page_size: 40,
            query,
        }
    }

    #[tokio::test]
    async fn test_category_request_and_decode() {
        let (client, seen) = fake_provider((
            StatusCode::OK,
            json!({
                "status": "ok",
                "totalResults": 1,
                "articles": [{
                    "source": { "id": null, "name": "Example Times" },
                    "author": null,
                    "title": "Final over thriller",
                    "description": "…",
                    "url": "https://example.com/a",
                    "urlToImage": null,
                    "publishedAt": "2025-01-01T10:00:00Z",
                    "content": null
                }]
            }),
        ))
        .await;

        let articles = client
            .fetch_headlines(&request(HeadlineQuery::Category(NewsCategory::Sports)))
            .await
            .unwrap();

        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title.as_deref(), Some("Final over thriller"));
        assert_eq!(
            articles[0].source.as_ref().and_then(|s| s.name.as_deref()),
            Some("Example Times")
        );

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0]["category"], "sports");
        assert_eq!(seen[0]["apiKey"], "test-key");
        assert_eq!(seen[0]["pageSize"], "40");
        assert!(!seen[0].contains_key("q"));
    }

    #[tokio::test]
    async fn test_keyword_request() {
        let (client, seen) =
            fake_provider((StatusCode::OK, json!({ "status": "ok", "articles": [] }))).await;

        let articles = client
            .fetch_headlines(&request(HeadlineQuery::Keyword("Pune".to_string())))
            .await
            .unwrap();

        assert!(articles.is_empty());
        let seen = seen.lock().unwrap();
        assert_eq!(seen[0]["q"], "Pune");
        assert!(!seen[0].contains_key("category"));
    }

    #[tokio::test]
    async fn test_missing_articles_is_empty() {
        let (client, _) = fake_provider((StatusCode::OK, json!({ "status": "ok" }))).await;

        let articles = client
            .fetch_headlines(&request(HeadlineQuery::Category(NewsCategory::General)))
            .await
            .unwrap();
        assert!(articles.is_empty());
    }

    #[tokio::test]
    async fn test_provider_error_is_mirrored() {
        let (client, _) = fake_provider((
            StatusCode::UNAUTHORIZED,
            json!({
                "status": "error",
                "code": "apiKeyInvalid",
                "message": "Your API key is invalid or incorrect."
            }),
        ))
        .await;

        let err = client
            .fetch_headlines(&request(HeadlineQuery::Category(NewsCategory::General)))
            .await
            .unwrap_err();

        match err {
            NewsError::Upstream { status, detail } => {
                assert_eq!(status, 401);
                assert_eq!(detail, "Your API key is invalid or incorrect.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_provider() {
        // Bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = Url::parse(&format!("http://{addr}/v2/top-headlines")).unwrap();
        let client = NewsApiClient::new(endpoint, Duration::from_secs(2)).unwrap();

        let err = client
            .fetch_headlines(&request(HeadlineQuery::Category(NewsCategory::General)))
            .await
            .unwrap_err();

        assert!(matches!(err, NewsError::Transport(_)));
        assert!(!err.to_string().contains("test-key"));
    }

    #[test]
    fn test_status_error_without_body() {
        let err = map_status_error(503, b"<html>down</html>", Some("Service Unavailable"));
        match err {
            NewsError::Upstream { status, detail } => {
                assert_eq!(status, 503);
                assert_eq!(detail, "Service Unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_config_rejects_bad_url() {
        let config = NewsConfig {
            base_url: "not a url".to_string(),
            ..NewsConfig::default()
        };
        assert!(matches!(
            NewsApiClient::from_config(&config),
            Err(NewsError::Setup(_))
        ));
    }
}
