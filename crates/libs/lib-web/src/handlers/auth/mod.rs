//! # Authentication Handlers
//!
//! HTTP request handlers for the authentication endpoints.
//!
//! ## Overview
//!
//! - User signup with username/email/password and optional profile names
//! - User login with email or username
//! - JWT bearer-token issuance on both paths
//! - Stateless logout acknowledgment
//!
//! Credential verification is deliberately uniform: an unknown identifier and
//! a wrong password both answer 401 "Invalid credentials" so the API does not
//! reveal which accounts exist.

use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
};
use lib_auth::{encode_jwt, hash_password, verify_password, Claims};
use lib_core::model::store::{UserForCreate, UserRepository};
use lib_core::{AppError, Config, DbPool};
use lib_utils::validation::{validate_email, validate_profile_name, validate_username};
use shared::{AuthResponse, LoginRequest, LogoutResponse, SignupRequest};
use tracing::{debug, info, instrument, warn};

use super::{normalize_name, user_info};

/// Signup handler - creates a new user account.
///
/// # Validation
///
/// - Username: 3-30 characters, letters/digits/underscore
/// - Email: plausible address format, stored lowercased
/// - Password: at least 8 characters (enforced in `hash_password`)
/// - Optional first/last name: at most 50 characters
/// - Username and email must both be unique
///
/// # Returns
///
/// * `201 Created` with [`AuthResponse`] (user + JWT) on success
/// * `400` validation error, `409` duplicate, `500` storage failure
#[instrument(skip(pool, config, req), fields(username = %req.username, email = %req.email))]
pub async fn signup(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    info!("[SIGNUP] New user signup request");

    validate_username(&req.username).map_err(AppError::InvalidInput)?;

    // Accidental surrounding whitespace is forgiven; internal whitespace
    // still fails validation.
    let email = req.email.trim().to_lowercase();
    validate_email(&email).map_err(AppError::InvalidInput)?;

    let first_name = normalize_name(req.first_name);
    let last_name = normalize_name(req.last_name);
    if let Some(name) = &first_name {
        validate_profile_name(name, "First name").map_err(AppError::InvalidInput)?;
    }
    if let Some(name) = &last_name {
        validate_profile_name(name, "Last name").map_err(AppError::InvalidInput)?;
    }

    if UserRepository::find_by_email(&pool, &email).await?.is_some() {
        warn!("[SIGNUP] Email already registered");
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    if UserRepository::find_by_username(&pool, &req.username)
        .await?
        .is_some()
    {
        warn!("[SIGNUP] Username already taken: {}", req.username);
        return Err(AppError::Conflict("Username already taken".to_string()));
    }

    debug!("[SIGNUP] Hashing password...");
    let password_hash = hash_password(&req.password)?;

    debug!("[SIGNUP] Creating user in database...");
    let user_data = UserForCreate::new(req.username, email, password_hash)
        .with_profile(first_name, last_name);
    let user = UserRepository::create(&pool, user_data).await?;

    debug!("[SIGNUP] Generating JWT token...");
    let token = encode_jwt(
        user.id,
        user.username.clone(),
        &config.jwt_secret,
        config.jwt_expiration_hours,
    )?;

    info!("[SIGNUP] User created and authenticated (id: {})", user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: user_info(&user),
            token,
            message: "Signup successful".to_string(),
        }),
    ))
}

/// Login handler - authenticates an existing user.
///
/// # Authentication
///
/// - Accepts either an email (contains '@') or a username
/// - Verifies the password against the stored Argon2 hash
/// - Rejects deactivated accounts with 403
/// - Records the login (last_login timestamp, login_count)
/// - Issues a JWT bearer token
pub async fn login(
    State(pool): State<DbPool>,
    State(config): State<Config>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    info!("[LOGIN] Login attempt");

    let user = if req.email_or_username.contains('@') {
        debug!("[LOGIN] Looking up by email...");
        UserRepository::find_by_email(&pool, &req.email_or_username.trim().to_lowercase()).await?
    } else {
        debug!("[LOGIN] Looking up by username...");
        UserRepository::find_by_username(&pool, &req.email_or_username).await?
    };

    let user = user.ok_or_else(|| {
        warn!("[LOGIN] Unknown identifier");
        AppError::Unauthorized("Invalid credentials".to_string())
    })?;

    if !user.is_active {
        warn!("[LOGIN] Account deactivated: {}", user.username);
        return Err(AppError::Forbidden("Account is deactivated".to_string()));
    }

    debug!("[LOGIN] Verifying password...");
    if !verify_password(&req.password, &user.password_hash)? {
        warn!("[LOGIN] Invalid password for user: {}", user.username);
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    debug!("[LOGIN] Recording login...");
    // Best effort; a failed stamp must not block an otherwise valid login.
    if let Err(e) = UserRepository::record_login(&pool, user.id).await {
        warn!("[LOGIN] Failed to record login: {}", e);
    }

    debug!("[LOGIN] Generating JWT token...");
    let token = encode_jwt(
        user.id,
        user.username.clone(),
        &config.jwt_secret,
        config.jwt_expiration_hours,
    )?;

    // Reload so the response reflects the login we just recorded.
    let user = UserRepository::find_by_id(&pool, user.id)
        .await?
        .unwrap_or(user);

    info!("[LOGIN] User authenticated (id: {})", user.id);

    Ok((
        StatusCode::OK,
        Json(AuthResponse {
            user: user_info(&user),
            token,
            message: "Login successful".to_string(),
        }),
    ))
}

/// Logout handler - stateless acknowledgment.
///
/// The session design keeps no server-side session state and performs no
/// token revocation; logout is the client discarding its token. This endpoint
/// exists so the client can record the logout server-side in the access log.
pub async fn logout(
    Extension(claims): Extension<Claims>,
) -> Result<(StatusCode, Json<LogoutResponse>), AppError> {
    info!("[LOGOUT] User logged out: {} (id: {})", claims.username, claims.sub);

    Ok((
        StatusCode::OK,
        Json(LogoutResponse {
            message: "Logout successful".to_string(),
        }),
    ))
}

#[cfg(test)]
mod tests;
