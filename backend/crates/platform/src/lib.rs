//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations that carry no business meaning:
//! - Password hashing (Argon2id with fixed cost parameters)
//! - Signed, expiring session tokens (HS256 JWT)
//! - Authorization header parsing

pub mod client;
pub mod password;
pub mod token;
