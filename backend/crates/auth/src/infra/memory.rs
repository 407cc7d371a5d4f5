//! In-memory Repository Implementation
//!
//! Process-local store for development and tests. Everything is lost on
//! restart.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::{ProfileChanges, User, UserProfile};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    /// email -> owner; the uniqueness index
    emails: HashMap<Email, UserId>,
}

/// In-memory auth repository
///
/// Cloning shares the same tables.
#[derive(Clone, Default)]
pub struct InMemoryAuthRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryAuthRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.tables.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl UserRepository for InMemoryAuthRepository {
    async fn insert(&self, user: &User) -> AuthResult<()> {
        let mut tables = self.tables.write().await;

        if tables.emails.contains_key(&user.email) {
            return Err(AuthError::DuplicateUser);
        }

        tables.emails.insert(user.email.clone(), user.user_id);
        tables.users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let tables = self.tables.read().await;

        Ok(tables
            .emails
            .get(email)
            .and_then(|user_id| tables.users.get(user_id))
            .cloned())
    }

    async fn find_profile(&self, user_id: &UserId) -> AuthResult<Option<UserProfile>> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(user_id).map(User::profile))
    }

    async fn update_profile(
        &self,
        user_id: &UserId,
        changes: &ProfileChanges,
    ) -> AuthResult<Option<UserProfile>> {
        let mut tables = self.tables.write().await;

        let Some(current_email) = tables.users.get(user_id).map(|u| u.email.clone()) else {
            return Ok(None);
        };

        if let Some(new_email) = &changes.email {
            match tables.emails.get(new_email) {
                Some(owner) if owner != user_id => return Err(AuthError::DuplicateUser),
                _ => {}
            }
            tables.emails.remove(&current_email);
            tables.emails.insert(new_email.clone(), *user_id);
        }

        let Some(user) = tables.users.get_mut(user_id) else {
            return Ok(None);
        };
        user.apply(changes);
        Ok(Some(user.profile()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::display_name::DisplayName;
    use platform::password::ClearTextPassword;

    fn user(email: &str) -> User {
        let hash = ClearTextPassword::new("pw123456".to_string())
            .unwrap()
            .hash(None)
            .unwrap();
        User::new(
            DisplayName::new("Asha").unwrap(),
            Email::new(email).unwrap(),
            hash,
            None,
            None,
        )
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryAuthRepository::new();
        let asha = user("asha@example.com");
        repo.insert(&asha).await.unwrap();

        let found = repo
            .find_by_email(&Email::new("ASHA@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.user_id, asha.user_id);

        let profile = repo.find_profile(&asha.user_id).await.unwrap().unwrap();
        assert_eq!(profile.email.as_str(), "asha@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryAuthRepository::new();
        repo.insert(&user("asha@example.com")).await.unwrap();

        let err = repo.insert(&user("asha@example.com")).await.unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUser));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_email_moves_index() {
        let repo = InMemoryAuthRepository::new();
        let asha = user("asha@example.com");
        repo.insert(&asha).await.unwrap();

        let changes = ProfileChanges::new(None, Some(Email::new("asha@work.example").unwrap()));
        let profile = repo
            .update_profile(&asha.user_id, &changes)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(profile.email.as_str(), "asha@work.example");

        assert!(
            repo.find_by_email(&Email::new("asha@example.com").unwrap())
                .await
                .unwrap()
                .is_none()
        );
        // The old address is free again
        repo.insert(&user("asha@example.com")).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_to_taken_email_rejected() {
        let repo = InMemoryAuthRepository::new();
        let asha = user("asha@example.com");
        repo.insert(&asha).await.unwrap();
        repo.insert(&user("ravi@example.com")).await.unwrap();

        let changes = ProfileChanges::new(None, Some(Email::new("ravi@example.com").unwrap()));
        let err = repo
            .update_profile(&asha.user_id, &changes)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::DuplicateUser));
    }

    #[tokio::test]
    async fn test_update_unknown_user() {
        let repo = InMemoryAuthRepository::new();
        let changes = ProfileChanges::new(Some(DisplayName::new("X").unwrap()), None);
        assert!(
            repo.update_profile(&UserId::new(), &changes)
                .await
                .unwrap()
                .is_none()
        );
    }
}
