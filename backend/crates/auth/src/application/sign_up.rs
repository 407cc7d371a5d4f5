//! Sign Up Use Case
//!
//! Creates a new account and signs the caller in.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use platform::token::TokenSigner;

use crate::application::config::AuthConfig;
use crate::application::session::{AuthGrant, hash_password, issue_grant};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, location::normalize_location,
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenSigner>,
    config: Arc<AuthConfig>,
}

impl<U> SignUpUseCase<U>
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

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<AuthGrant> {
        let name = DisplayName::new(&input.name)?;
        let email = Email::new(&input.email)?;
        let password = ClearTextPassword::new(input.password)?;

        // Fast path; the store's unique index settles concurrent signups.
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateUser);
        }

        let password_hash = hash_password(password, &self.config).await?;

        let user = User::new(
            name,
            email,
            password_hash,
            normalize_location(input.city),
            normalize_location(input.state),
        );

        self.user_repo.insert(&user).await?;

        tracing::info!(user_id = %user.user_id, "User signed up");

        issue_grant(&self.tokens, &self.config, &user)
    }
}
