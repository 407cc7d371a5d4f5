//! Sign In Use Case
//!
//! Checks email and password and issues a session token.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenSigner;

use crate::application::config::AuthConfig;
use crate::application::session::{AuthGrant, burn_password_check, issue_grant, verify_password};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult, CredentialFailure};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenSigner>,
    config: Arc<AuthConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenSigner>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<AuthGrant> {
        let password = ClearTextPassword::new(input.password).ok();

        // An address that cannot be valid cannot belong to an account.
        let user = match Email::new(&input.email) {
            Ok(email) => self.user_repo.find_by_email(&email).await?,
            Err(_) => None,
        };

        let (user, password) = match (user, password) {
            (Some(user), Some(password)) => (user, password),
            (Some(_), None) => return Err(self.refuse(CredentialFailure::WrongPassword)),
            (None, Some(password)) => {
                burn_password_check(password, &self.config).await?;
                return Err(self.refuse(CredentialFailure::UnknownEmail));
            }
            (None, None) => return Err(self.refuse(CredentialFailure::UnknownEmail)),
        };

        let matches = verify_password(password, user.password_hash.clone(), &self.config).await?;
        if !matches {
            return Err(self.refuse(CredentialFailure::WrongPassword));
        }

        tracing::info!(user_id = %user.user_id, "User signed in");

        issue_grant(&self.tokens, &self.config, &user)
    }

    fn refuse(&self, reason: CredentialFailure) -> AuthError {
        if self.config.hide_login_failure_reason {
            tracing::debug!(reason = ?reason, "Login failure reason withheld");
            AuthError::InvalidCredentials(CredentialFailure::Undisclosed)
        } else {
            AuthError::InvalidCredentials(reason)
        }
    }
}
