//! # User Handlers
//!
//! Handlers behind the bearer-token middleware: current-user lookup and
//! profile updates. The middleware validates the token and injects
//! [`Claims`]; these handlers resolve the claims to a live user record on
//! every request, so a deleted or deactivated account loses access the
//! moment its state changes, not when its token expires.

use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use lib_auth::Claims;
use lib_core::model::store::{ProfileUpdate, User, UserRepository};
use lib_core::{AppError, DbPool};
use lib_utils::validation::validate_profile_name;
use shared::{UpdateProfileRequest, UserResponse};
use tracing::{debug, info, warn};

use super::{normalize_name, user_info};

/// Resolve token claims to a live, active user record.
///
/// 401 when the user no longer exists (the client must drop its token),
/// 403 when the account was deactivated after the token was minted.
async fn resolve_user(pool: &DbPool, claims: &Claims) -> Result<User, AppError> {
    let user_id = claims.user_id().ok_or_else(|| {
        warn!("[USER] Token subject is not a user id");
        AppError::Unauthorized("Invalid or expired token".to_string())
    })?;

    let user = UserRepository::find_by_id(pool, user_id)
        .await?
        .ok_or_else(|| {
            warn!("[USER] Token subject no longer exists: {}", user_id);
            AppError::Unauthorized("User account no longer exists".to_string())
        })?;

    if !user.is_active {
        warn!("[USER] Account deactivated: {}", user.username);
        return Err(AppError::Forbidden("Account is deactivated".to_string()));
    }

    Ok(user)
}

/// `GET /api/user` - return the current authenticated user.
pub async fn current_user(
    State(pool): State<DbPool>,
    Extension(claims): Extension<Claims>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    debug!("[USER] Current-user lookup for {}", claims.sub);

    let user = resolve_user(&pool, &claims).await?;

    Ok((
        StatusCode::OK,
        Json(UserResponse {
            user: user_info(&user),
        }),
    ))
}

/// `PUT /api/user/profile` - replace the profile names of the current user.
///
/// Only `first_name` and `last_name` can change here; username, email, and
/// password are not reachable from this endpoint. Absent or empty fields
/// clear the stored value.
pub async fn update_profile(
    State(pool): State<DbPool>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    info!("[USER] Profile update for {}", claims.sub);

    let user = resolve_user(&pool, &claims).await?;

    let first_name = normalize_name(req.first_name);
    let last_name = normalize_name(req.last_name);

    if let Some(name) = &first_name {
        validate_profile_name(name, "First name").map_err(AppError::InvalidInput)?;
    }
    if let Some(name) = &last_name {
        validate_profile_name(name, "Last name").map_err(AppError::InvalidInput)?;
    }

    let updated =
        UserRepository::update_profile(&pool, user.id, ProfileUpdate::new(first_name, last_name))
            .await?;

    info!("[USER] Profile updated for {} (id: {})", updated.username, updated.id);

    Ok((
        StatusCode::OK,
        Json(UserResponse {
            user: user_info(&updated),
        }),
    ))
}
