//! News Error Types
//!
//! Failures render as the news envelope `{status: "error", message,
//! articles: []}` rather than the kernel error body, since the news client
//! reads that envelope for both outcomes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::kind::ErrorKind;
use thiserror::Error;

use crate::presentation::dto::NewsResponse;

/// News-specific result type alias
pub type NewsResult<T> = Result<T, NewsError>;

/// News-specific error variants
#[derive(Debug, Error)]
pub enum NewsError {
    /// No provider API key configured
    #[error("Configuration error: Missing API key.")]
    MissingApiKey,

    /// Provider answered with a non-success status
    #[error("{detail}")]
    Upstream { status: u16, detail: String },

    /// Provider could not be reached or timed out
    #[error("{0}")]
    Transport(String),

    /// Provider answered 2xx with an unreadable body
    #[error("Unreadable provider response: {0}")]
    InvalidResponse(String),

    /// HTTP client could not be built
    #[error("News client setup failed: {0}")]
    Setup(String),
}

impl NewsError {
    /// Build from a reqwest error without leaking the request URL (it
    /// carries the API key)
    pub fn transport(err: reqwest::Error) -> Self {
        NewsError::Transport(err.without_url().to_string())
    }

    /// Get the HTTP status code for this error
    ///
    /// Provider failures mirror the provider's status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            NewsError::Upstream { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            NewsError::MissingApiKey
            | NewsError::Transport(_)
            | NewsError::InvalidResponse(_)
            | NewsError::Setup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from_status(self.status_code().as_u16())
    }

    /// Message shown to the client
    pub fn client_message(&self) -> String {
        match self {
            NewsError::MissingApiKey => self.to_string(),
            _ => format!("Failed to fetch news. Check API Key or server logs. Detail: {self}"),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            NewsError::MissingApiKey => {
                tracing::error!("NEWS_API_KEY is not configured");
            }
            NewsError::Upstream { status, detail } => {
                tracing::warn!(status = *status, detail = %detail, "News provider error");
            }
            NewsError::Transport(msg) => {
                tracing::error!(error = %msg, "News provider unreachable");
            }
            NewsError::InvalidResponse(msg) => {
                tracing::error!(error = %msg, "News provider response unreadable");
            }
            NewsError::Setup(msg) => {
                tracing::error!(error = %msg, "News client setup failed");
            }
        }
    }
}

impl IntoResponse for NewsError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        (status, Json(NewsResponse::failure(self.client_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_is_mirrored() {
        let err = NewsError::Upstream {
            status: 401,
            detail: "Your API key is invalid".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.kind(), ErrorKind::Unauthorized);
        assert_eq!(
            err.client_message(),
            "Failed to fetch news. Check API Key or server logs. Detail: Your API key is invalid"
        );
    }

    #[test]
    fn test_odd_upstream_status_becomes_500() {
        let err = NewsError::Upstream {
            status: 204,
            detail: String::new(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_key_message() {
        assert_eq!(
            NewsError::MissingApiKey.client_message(),
            "Configuration error: Missing API key."
        );
        assert_eq!(
            NewsError::MissingApiKey.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_envelope() {
        let response = NewsError::Transport("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["articles"], serde_json::json!([]));
        assert!(body["message"].as_str().unwrap().ends_with("Detail: connection refused"));
    }
}
