//! # User Data Transfer Objects
//!
//! Public user information and profile-update structures.
//!
//! ## Endpoints Using These DTOs
//!
//! - `GET /api/user` - [`UserResponse`] (current authenticated user)
//! - `PUT /api/user/profile` - [`UpdateProfileRequest`] -> [`UserResponse`]

use serde::{Deserialize, Serialize};

/// Editable profile fields attached to a user.
///
/// The avatar is read-only over the API; only the backend (or future admin
/// tooling) sets it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Public user information.
///
/// This is everything a client may learn about a user. The password hash is
/// deliberately absent and must never be added here.
///
/// # Fields
///
/// * `id` - User ID as a string (stable across renames)
/// * `username` / `email` - Identity fields, unique per account
/// * `profile` - Editable profile fields (see [`UserProfile`])
/// * `full_name` - "first last" when both profile names are set, otherwise the username
/// * `created_at` - RFC 3339 timestamp of account creation
/// * `last_login` - RFC 3339 timestamp of the most recent login, if any
/// * `login_count` - Number of successful logins
/// * `is_active` - Deactivated accounts cannot log in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    pub profile: UserProfile,
    pub full_name: String,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    pub login_count: i64,
    pub is_active: bool,
}

/// Wrapper for endpoints that return a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserInfo,
}

/// Profile update request for `PUT /api/user/profile`.
///
/// The update replaces both profile names wholesale: an absent or empty field
/// clears the stored value. Username, email, and password cannot be changed
/// through this endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}
