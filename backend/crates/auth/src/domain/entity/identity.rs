//! Session Identity
//!
//! What a session token asserts about its bearer. Serialized as the token's
//! `user` claim: `{"user": {"id": "...", "name": "..."}}`.

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

/// Identity established by a verified bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub name: String,
}

/// Claims signed into a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user: AuthenticatedUser,
}

impl SessionClaims {
    pub fn for_user(user: &User) -> Self {
        Self {
            user: AuthenticatedUser {
                id: user.user_id.to_string(),
                name: user.name.to_string(),
            },
        }
    }
}
