//! Signed Session Tokens
//!
//! Stateless bearer credentials: an HS256 JWT carrying caller-defined claims
//! plus `iat`/`exp`. Nothing is stored server-side; a token is good exactly
//! while its signature checks out and `now < exp`.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Token issuance/verification failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature does not match")]
    InvalidSignature,

    #[error("Token has expired")]
    Expired,

    #[error("Token signing secret is empty")]
    EmptySecret,

    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Claims as they travel inside the token
///
/// The caller's claims are flattened next to the registered `iat`/`exp`
/// fields, so `{user: {..}}` becomes `{"user": {..}, "iat": .., "exp": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedClaims<C> {
    #[serde(flatten)]
    pub claims: C,
    /// Issued-at, seconds since the Unix epoch
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch (exclusive)
    pub exp: i64,
}

/// HS256 signer/verifier bound to one server secret
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenSigner {
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::EmptySecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Issue a token valid for `ttl` from now
    pub fn issue<C: Serialize>(&self, claims: C, ttl: Duration) -> Result<String, TokenError> {
        self.issue_at(claims, Utc::now(), ttl)
    }

    /// Issue a token as if it had been signed at `issued_at`
    pub fn issue_at<C: Serialize>(
        &self,
        claims: C,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| TokenError::Signing(format!("Invalid token TTL: {e}")))?;

        let signed = SignedClaims {
            claims,
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &signed, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify signature and expiry, then hand back the claims
    pub fn verify<C: DeserializeOwned>(&self, token: &str) -> Result<SignedClaims<C>, TokenError> {
        let data = jsonwebtoken::decode::<SignedClaims<C>>(token, &self.decoding, &self.validation)
            .map_err(|e| match e.kind() {
                errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        // The library treats `exp` as inclusive; a token is dead at its expiry second.
        if Utc::now().timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

impl fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSigner")
            .field("algorithm", &"HS256")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
