//! Shared Kernel
//!
//! Vocabulary shared by every bounded context of the backend:
//! - Error classification ([`error::kind::ErrorKind`]) and the unified
//!   [`error::app_error::AppError`]
//! - Typed identifiers ([`id::Id`])
//!
//! Anything that lands here must mean the same thing in `auth` and `news`.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
