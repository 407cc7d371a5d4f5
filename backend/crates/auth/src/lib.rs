//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and configuration
//! - `infra/` - PostgreSQL and in-memory storage
//! - `presentation/` - HTTP handlers, DTOs, bearer guard, router
//!
//! ## Features
//! - Email + password signup and login
//! - Stateless HS256 session tokens, one hour lifetime
//! - Bearer-token guard for profile read/update
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, hashing runs on the blocking pool
//! - Email uniqueness enforced by the store, not by a read-then-write check
//! - Server-side failures never echo their detail to the client

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult, CredentialFailure};
pub use infra::{memory::InMemoryAuthRepository, postgres::PgAuthRepository};
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
