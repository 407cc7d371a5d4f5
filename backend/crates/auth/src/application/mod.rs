//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod profile;
pub mod session;
pub mod sign_in;
pub mod sign_up;
pub mod verify_token;

// Re-exports
pub use config::AuthConfig;
pub use profile::{GetProfileUseCase, UpdateProfileInput, UpdateProfileUseCase};
pub use session::AuthGrant;
pub use sign_in::{SignInInput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
pub use verify_token::VerifyTokenUseCase;
