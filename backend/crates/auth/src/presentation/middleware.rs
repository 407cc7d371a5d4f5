//! Auth Middleware
//!
//! Bearer-token guard for protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::client::extract_bearer_token;
use platform::token::TokenSigner;
use std::sync::Arc;

use crate::application::VerifyTokenUseCase;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGuardState {
    pub tokens: Arc<TokenSigner>,
}

/// Middleware that requires a valid bearer token
///
/// On success the caller's [`AuthenticatedUser`](crate::domain::AuthenticatedUser)
/// is placed in the request extensions for the handler.
pub async fn require_bearer_token(
    State(state): State<AuthGuardState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(req.headers())
        .map_err(|e| AuthError::from(e).into_response())?;

    let use_case = VerifyTokenUseCase::new(state.tokens.clone());
    let user = use_case
        .execute(token)
        .map_err(IntoResponse::into_response)?;

    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
