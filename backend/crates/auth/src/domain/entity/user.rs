//! User Entity
//!
//! A registered account. `User` is the stored record including the password
//! hash; `UserProfile` is the outward projection without it.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{display_name::DisplayName, email::Email, user_id::UserId};

/// Stored account record
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub name: DisplayName,
    /// Unique, lowercased
    pub email: Email,
    pub password_hash: HashedPassword,
    pub city: Option<String>,
    pub state: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh id
    pub fn new(
        name: DisplayName,
        email: Email,
        password_hash: HashedPassword,
        city: Option<String>,
        state: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            city,
            state,
            created_at: now,
            updated_at: now,
        }
    }

    /// Project out everything but the password hash
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            user_id: self.user_id,
            name: self.name.clone(),
            email: self.email.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Apply a profile update, bumping `updated_at`
    pub fn apply(&mut self, changes: &ProfileChanges) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
        }
        if let Some(email) = &changes.email {
            self.email = email.clone();
        }
        self.updated_at = changes.requested_at;
    }
}

/// Account as seen by API clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: UserId,
    pub name: DisplayName,
    pub email: Email,
    pub city: Option<String>,
    pub state: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a profile update may change
#[derive(Debug, Clone)]
pub struct ProfileChanges {
    pub name: Option<DisplayName>,
    pub email: Option<Email>,
    pub requested_at: DateTime<Utc>,
}

impl ProfileChanges {
    pub fn new(name: Option<DisplayName>, email: Option<Email>) -> Self {
        Self {
            name,
            email,
            requested_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn sample_user() -> User {
        let hash = ClearTextPassword::new("pw123456".to_string())
            .unwrap()
            .hash(None)
            .unwrap();
        User::new(
            DisplayName::new("Asha").unwrap(),
            Email::new("asha@example.com").unwrap(),
            hash,
            Some("Pune".to_string()),
            None,
        )
    }

    #[test]
    fn test_new_user_timestamps_match() {
        let user = sample_user();
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_profile_projection() {
        let user = sample_user();
        let profile = user.profile();
        assert_eq!(profile.user_id, user.user_id);
        assert_eq!(profile.email.as_str(), "asha@example.com");
        assert_eq!(profile.city.as_deref(), Some("Pune"));
    }

    #[test]
    fn test_apply_changes_bumps_updated_at() {
        let mut user = sample_user();
        let created_at = user.created_at;
        let mut changes = ProfileChanges::new(Some(DisplayName::new("Asha R").unwrap()), None);
        changes.requested_at = created_at + chrono::Duration::seconds(5);

        user.apply(&changes);

        assert_eq!(user.name.as_str(), "Asha R");
        assert_eq!(user.email.as_str(), "asha@example.com");
        assert_eq!(user.created_at, created_at);
        assert!(user.updated_at > created_at);
    }
}
