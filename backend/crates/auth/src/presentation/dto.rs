//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::AuthGrant;
use crate::domain::entity::user::UserProfile;

// ============================================================================
// Sign Up / Login
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
pub struct SignUpRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Body returned by both signup and login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub message: &'static str,
}

impl AuthResponse {
    pub fn new(grant: AuthGrant, message: &'static str) -> Self {
        Self {
            token: grant.token,
            user_id: grant.user_id,
            user_name: grant.user_name,
            user_email: grant.user_email,
            message,
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Profile update request; omitted fields stay as they are
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Profile response (never includes the password hash)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for UserProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.user_id.to_string(),
            name: profile.name.into_db(),
            email: profile.email.into_db(),
            city: profile.city,
            state: profile.state,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}
