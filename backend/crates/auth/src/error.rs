//! Auth Error Types
//!
//! Auth-specific error variants that render through the unified
//! `kernel::error::AppError` body.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Message returned for any server-side failure
const SERVER_ERROR_MESSAGE: &str = "Server Error";

/// PostgreSQL SQLSTATE for `unique_violation`
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Why a login attempt was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialFailure {
    /// No account for the submitted email
    UnknownEmail,
    /// Account exists, password does not match
    WrongPassword,
    /// Reason withheld from the client
    Undisclosed,
}

impl fmt::Display for CredentialFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialFailure::UnknownEmail => f.write_str("Invalid Credentials (User not found)"),
            CredentialFailure::WrongPassword => f.write_str("Invalid Credentials (Wrong password)"),
            CredentialFailure::Undisclosed => f.write_str("Invalid Credentials"),
        }
    }
}

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email already registered
    #[error("User already exists")]
    DuplicateUser,

    /// Login refused
    #[error("{0}")]
    InvalidCredentials(CredentialFailure),

    /// No bearer token on a guarded route
    #[error("No token, authorization denied")]
    MissingToken,

    /// Bearer token failed verification
    #[error("Token is not valid")]
    InvalidToken,

    /// No account with the requested id
    #[error("User not found")]
    UserNotFound,

    /// Request field failed validation
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::DuplicateUser
            | AuthError::InvalidCredentials(_)
            | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::MissingToken | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::UserNotFound => StatusCode::NOT_FOUND,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::from_status(self.status_code().as_u16())
    }

    /// Convert to AppError
    ///
    /// Server-side failures carry a generic message; the detail only goes to
    /// the log.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::new(self.kind(), SERVER_ERROR_MESSAGE)
            }
            AuthError::MissingToken | AuthError::InvalidToken => {
                AppError::new(self.kind(), self.to_string())
                    .with_action("Sign in again to obtain a new token")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials(reason) => {
                tracing::warn!(reason = ?reason, "Invalid login attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected invalid bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        let unique_violation = err
            .as_database_error()
            .and_then(|db_err| db_err.code())
            .is_some_and(|code| code == PG_UNIQUE_VIOLATION);

        if unique_violation {
            AuthError::DuplicateUser
        } else {
            AuthError::Database(err)
        }
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_server_error() {
            AuthError::Internal(err.to_string())
        } else {
            AuthError::Validation(err.message().to_string())
        }
    }
}

impl From<platform::password::PasswordPolicyError> for AuthError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        AuthError::Validation(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for AuthError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

impl From<platform::token::TokenError> for AuthError {
    fn from(err: platform::token::TokenError) -> Self {
        use platform::token::TokenError;
        match err {
            TokenError::Malformed | TokenError::InvalidSignature | TokenError::Expired => {
                AuthError::InvalidToken
            }
            TokenError::EmptySecret | TokenError::Signing(_) => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<platform::client::BearerError> for AuthError {
    fn from(err: platform::client::BearerError) -> Self {
        use platform::client::BearerError;
        match err {
            BearerError::Missing | BearerError::Empty => AuthError::MissingToken,
            BearerError::Malformed => AuthError::InvalidToken,
        }
    }
}
