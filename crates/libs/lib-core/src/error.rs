//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used
//! consistently across backend modules, following the `thiserror` pattern.
//!
//! ## Error Categories
//!
//! 1. **Validation** - [`InvalidInput`](AppError::InvalidInput) → 400 Bad Request
//! 2. **Conflict** - [`Conflict`](AppError::Conflict) → 409 Conflict (duplicate username/email)
//! 3. **Authentication** - [`Unauthorized`](AppError::Unauthorized) → 401 (bad credentials,
//!    missing/invalid/expired token); [`Forbidden`](AppError::Forbidden) → 403 (deactivated account)
//! 4. **Server** - [`Config`](AppError::Config) / [`Internal`](AppError::Internal) → 500
//!    (storage failure and other unexpected breakage)
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn check_username(name: &str) -> Result<()> {
//!     if name.len() < 3 {
//!         return Err(AppError::InvalidInput(
//!             "Username must be at least 3 characters".to_string(),
//!         ));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Conversion
//!
//! - `From<anyhow::Error>` - startup and glue errors
//! - `From<sqlx::Error>` - database errors; UNIQUE violations become `Conflict`
//! - `From<lib_auth::AuthError>` - hashing and token errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lib_auth::AuthError;
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type covering all error scenarios.
///
/// Each variant includes a descriptive `String` for context. The `#[error]`
/// attribute from `thiserror` provides the `Display` implementation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input (format/length validation).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Uniqueness conflict (duplicate username or email).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Authentication failure (bad credentials, missing/invalid/expired token).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed (deactivated account).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Requested resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error (storage failure, unexpected breakage).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-facing error message.
    ///
    /// Server errors return a generic message so implementation details never
    /// leak to clients; the full error still goes to the server log.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::Conflict(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg) => msg.clone(),
            AppError::Config(_) | AppError::Internal(_) => {
                "An internal error occurred".to_string()
            }
        }
    }

    /// Variant name, surfaced as the `code` field of error responses.
    fn code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "Config",
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::Conflict(_) => "Conflict",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::Forbidden(_) => "Forbidden",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) => "Internal",
        }
    }
}

/// Axum integration: every `AppError` renders as a JSON error body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.user_message();

        // Full error detail goes to the log, not the wire.
        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(json!({
            "error": message,
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Database record not found".to_string()),
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                // Handlers pre-check uniqueness for precise messages; this is
                // the backstop for the insert race.
                AppError::Conflict("Username or email already registered".to_string())
            }
            sqlx::Error::Database(db_err) => {
                AppError::Internal(format!("Database error: {}", db_err.message()))
            }
            _ => AppError::Internal(format!("Database error: {}", err)),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::PasswordTooShort => AppError::InvalidInput(err.to_string()),
            AuthError::TokenInvalid => AppError::Unauthorized("Invalid or expired token".to_string()),
            AuthError::Hash(_) | AuthError::InvalidHash(_) | AuthError::TokenEncode(_) => {
                AppError::Internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            AppError::InvalidInput("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Unauthorized("x".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Forbidden("x".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_errors_hide_detail_from_clients() {
        let err = AppError::Internal("connection pool exhausted".into());
        assert_eq!(err.user_message(), "An internal error occurred");
    }

    #[test]
    fn auth_errors_map_to_http_classes() {
        let err: AppError = AuthError::PasswordTooShort.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: AppError = AuthError::TokenInvalid.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
    }
}
