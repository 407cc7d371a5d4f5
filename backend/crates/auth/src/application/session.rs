//! Session issuance and password work shared by sign up and sign in

use platform::password::{ClearTextPassword, HashedPassword};
use platform::token::TokenSigner;
use zeroize::Zeroizing;

use crate::application::config::AuthConfig;
use crate::domain::entity::{identity::SessionClaims, user::User};
use crate::error::{AuthError, AuthResult};

/// Token plus the identity it was issued for
#[derive(Debug, Clone)]
pub struct AuthGrant {
    pub token: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
}

/// Sign a session token for `user`
pub(crate) fn issue_grant(
    tokens: &TokenSigner,
    config: &AuthConfig,
    user: &User,
) -> AuthResult<AuthGrant> {
    let token = tokens.issue(SessionClaims::for_user(user), config.token_ttl)?;

    Ok(AuthGrant {
        token,
        user_id: user.user_id.to_string(),
        user_name: user.name.to_string(),
        user_email: user.email.to_string(),
    })
}

/// Argon2 off the async executor
pub(crate) async fn hash_password(
    password: ClearTextPassword,
    config: &AuthConfig,
) -> AuthResult<HashedPassword> {
    let pepper = config.password_pepper.clone();

    tokio::task::spawn_blocking(move || password.hash(pepper_slice(&pepper)))
        .await
        .map_err(|e| AuthError::Internal(format!("Password hashing task failed: {e}")))?
        .map_err(AuthError::from)
}

/// Argon2 verification off the async executor
pub(crate) async fn verify_password(
    password: ClearTextPassword,
    hash: HashedPassword,
    config: &AuthConfig,
) -> AuthResult<bool> {
    let pepper = config.password_pepper.clone();

    tokio::task::spawn_blocking(move || hash.verify(&password, pepper_slice(&pepper)))
        .await
        .map_err(|e| AuthError::Internal(format!("Password verification task failed: {e}")))
}

/// Spend the Argon2 work of one verification and discard the result
///
/// Run when there is no stored hash to check against, so a refused login
/// costs the same whether or not the account exists.
pub(crate) async fn burn_password_check(
    password: ClearTextPassword,
    config: &AuthConfig,
) -> AuthResult<()> {
    hash_password(password, config).await.map(drop)
}

fn pepper_slice(pepper: &Option<Zeroizing<Vec<u8>>>) -> Option<&[u8]> {
    pepper.as_ref().map(|p| p.as_slice())
}
