//! # Authentication Library
//!
//! Password hashing and JWT token management. This crate performs no I/O; it
//! is the pure core of the credential-verification and token lifecycle.

pub mod pwd;
pub mod token;

use thiserror::Error;

// Re-export commonly used types
pub use pwd::{hash_password, verify_password};
pub use token::{decode_jwt, encode_jwt, Claims};

/// Errors from password hashing and token handling.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Failed to hash password: {0}")]
    Hash(String),

    #[error("Invalid password hash: {0}")]
    InvalidHash(String),

    #[error("Failed to encode JWT: {0}")]
    TokenEncode(String),

    #[error("Invalid or expired token")]
    TokenInvalid,
}
