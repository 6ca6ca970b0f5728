//! # Authentication Data Transfer Objects
//!
//! Request and response structures for the authentication endpoints.
//!
//! ## Endpoints Using These DTOs
//!
//! - `POST /api/auth/signup` - [`SignupRequest`] -> [`AuthResponse`]
//! - `POST /api/auth/login` - [`LoginRequest`] -> [`AuthResponse`]
//! - `POST /api/auth/logout` - [`LogoutResponse`]
//!
//! On failure every endpoint returns an [`ErrorResponse`] with an HTTP status
//! describing the error class (400 validation, 401 bad credentials or token,
//! 403 deactivated account, 409 duplicate username/email, 500 storage failure).

use serde::{Deserialize, Serialize};

use super::user::UserInfo;

/// Login request with email or username.
///
/// Supports login with either email address or username for flexibility.
///
/// # Fields
///
/// * `email_or_username` - Either an email ("alice@example.com") or a username ("alice")
/// * `password` - Plaintext password (verified server-side against the stored hash)
///
/// # Security Note
///
/// The password travels in plaintext over HTTPS and is never stored or logged;
/// the server compares it against a salted argon2 hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email_or_username: String,
    pub password: String,
}

/// Signup request for new user registration.
///
/// Used by the `POST /api/auth/signup` endpoint to create a new user account.
///
/// # Validation Rules (Server-Side)
///
/// - Username must be 3-30 characters, alphanumeric or underscore
/// - Email must be a valid format and not already registered
/// - Password must be at least 8 characters
/// - Both username and email must be unique in the database
/// - Optional profile names are limited to 50 characters each
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Authentication response returned on successful login or signup.
///
/// # Fields
///
/// * `user` - Public user information (see [`UserInfo`])
/// * `token` - JWT bearer token for subsequent API requests
/// * `message` - Human-readable success message
///
/// The client stores `token` and attaches it to protected requests as
/// `Authorization: Bearer <token>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserInfo,
    pub token: String,
    pub message: String,
}

/// Acknowledgment returned by `POST /api/auth/logout`.
///
/// Logout is a client-side token discard; the server keeps no session state
/// and performs no revocation. This response only confirms the request was
/// authenticated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// Standard error response body.
///
/// Every non-2xx API response carries this shape. The optional `code` field
/// names the server-side error variant and is informational only; clients
/// should branch on the HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
