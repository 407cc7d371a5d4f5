//! Profile Use Cases
//!
//! Read and update an account by id. Callers reach these only through the
//! bearer-token guard.

use std::sync::Arc;

use crate::domain::entity::user::{ProfileChanges, UserProfile};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_id::parse_user_id,
};
use crate::error::{AuthError, AuthResult};

/// Get profile use case
pub struct GetProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> GetProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, raw_user_id: &str) -> AuthResult<UserProfile> {
        let user_id = parse_user_id(raw_user_id).ok_or(AuthError::UserNotFound)?;

        self.user_repo
            .find_profile(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}

/// Update profile input; absent fields are left unchanged
#[derive(Debug, Default)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(
        &self,
        raw_user_id: &str,
        input: UpdateProfileInput,
    ) -> AuthResult<UserProfile> {
        let user_id = parse_user_id(raw_user_id).ok_or(AuthError::UserNotFound)?;

        let name = input.name.map(DisplayName::new).transpose()?;
        let email = input.email.map(Email::new).transpose()?;
        let changes = ProfileChanges::new(name, email);

        if changes.is_empty() {
            return self
                .user_repo
                .find_profile(&user_id)
                .await?
                .ok_or(AuthError::UserNotFound);
        }

        let profile = self
            .user_repo
            .update_profile(&user_id, &changes)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::info!(user_id = %profile.user_id, "User profile updated");

        Ok(profile)
    }
}
