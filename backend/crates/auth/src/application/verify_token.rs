//! Verify Token Use Case
//!
//! Turns a bearer token into the identity it asserts.

use std::sync::Arc;

use platform::token::TokenSigner;

use crate::domain::entity::identity::{AuthenticatedUser, SessionClaims};
use crate::error::AuthResult;

/// Verify token use case
pub struct VerifyTokenUseCase {
    tokens: Arc<TokenSigner>,
}

impl VerifyTokenUseCase {
    pub fn new(tokens: Arc<TokenSigner>) -> Self {
        Self { tokens }
    }

    /// Check signature and expiry; any failure is `AuthError::InvalidToken`
    pub fn execute(&self, token: &str) -> AuthResult<AuthenticatedUser> {
        let signed = self.tokens.verify::<SessionClaims>(token)?;
        Ok(signed.claims.user)
    }
}
