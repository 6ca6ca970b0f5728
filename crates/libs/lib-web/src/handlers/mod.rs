//! # HTTP Handlers
//!
//! Request handlers for the auth API.
//!
//! - **[`auth`]**: signup, login, logout
//! - **[`user`]**: current-user lookup and profile updates

pub mod auth;
pub mod user;

use lib_core::model::store::User;
use lib_utils::time::format_time;
use shared::{UserInfo, UserProfile};

/// Normalize an optional profile name: trim, drop when empty.
pub(crate) fn normalize_name(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Build the public [`UserInfo`] view of a user record.
///
/// This is the only place a `User` row crosses the wire boundary; the
/// password hash is dropped here and nowhere reintroduced.
pub(crate) fn user_info(user: &User) -> UserInfo {
    UserInfo {
        id: user.id.to_string(),
        username: user.username.clone(),
        email: user.email.clone(),
        profile: UserProfile {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            avatar: user.avatar.clone(),
        },
        full_name: user.full_name(),
        created_at: format_time(user.created_at),
        last_login: user.last_login.map(format_time),
        login_count: user.login_count,
        is_active: user.is_active,
    }
}
