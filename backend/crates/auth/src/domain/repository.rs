//! Repository Traits
//!
//! Interfaces for account persistence. Implementations live in the
//! infrastructure layer.

use crate::domain::entity::user::{ProfileChanges, User, UserProfile};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
///
/// Email uniqueness is the store's job: two concurrent inserts with the same
/// email must leave exactly one account, the other failing with
/// `AuthError::DuplicateUser`.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new account
    async fn insert(&self, user: &User) -> AuthResult<()>;

    /// Find a full record (with password hash) by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Find a profile by id
    async fn find_profile(&self, user_id: &UserId) -> AuthResult<Option<UserProfile>>;

    /// Apply changes and return the updated profile, or `None` if no such
    /// account. Moving to an email held by another account is
    /// `AuthError::DuplicateUser`.
    async fn update_profile(
        &self,
        user_id: &UserId,
        changes: &ProfileChanges,
    ) -> AuthResult<Option<UserProfile>>;
}
