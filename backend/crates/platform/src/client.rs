//! Client credential extraction
//!
//! Pulls the bearer token out of an inbound request's headers.

use axum::http::{HeaderMap, header};

/// Error when extracting a bearer token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    Missing,
    #[error("Authorization header carries no token")]
    Empty,
    #[error("Authorization header is not of the form `Bearer <token>`")]
    Malformed,
}

/// Extract the token from `Authorization: Bearer <token>`
///
/// The scheme is matched case-insensitively. A header whose second
/// space-separated segment is missing or empty is `Empty`; a different scheme
/// or non-ASCII bytes is `Malformed`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    let Some((scheme, rest)) = value.trim().split_once(' ') else {
        return Err(BearerError::Empty);
    };

    // The token is the second space-separated segment, so a doubled space
    // leaves it empty.
    let token = rest.split(' ').next().unwrap_or_default();
    if token.is_empty() {
        return Err(BearerError::Empty);
    }

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}
