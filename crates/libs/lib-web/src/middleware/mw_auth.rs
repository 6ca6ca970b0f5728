//! # Authentication Middleware
//!
//! Axum middleware for JWT bearer-token validation.
//!
//! Extracts and validates the token from the `Authorization` header, then
//! injects the authenticated user's [`Claims`](lib_auth::Claims) into the request extensions.
//! Handlers on protected routes extract them with `Extension<Claims>` and
//! resolve the user record per request.
//!
//! A 401 from this layer is the signal for the session client to drop its
//! local token and treat the session as ended.

use axum::{
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use lib_auth::decode_jwt;
use lib_core::{config::core_config, AppError};
use tracing::{debug, warn};

/// Validate the `Authorization: Bearer <token>` header.
///
/// # Behavior
///
/// - **Valid token**: continues to the handler with [`Claims`](lib_auth::Claims) in extensions
/// - **Missing/malformed header or invalid/expired token**: 401 with the
///   standard JSON error body
pub async fn require_auth(mut req: Request, next: Next) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            warn!("[AUTH] Missing Authorization header");
            AppError::Unauthorized("Missing authentication token".to_string())
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("[AUTH] Invalid Authorization header format");
        AppError::Unauthorized("Invalid authorization header".to_string())
    })?;

    let config = core_config();
    let claims = decode_jwt(token, &config.jwt_secret).map_err(|_| {
        warn!("[AUTH] JWT validation failed");
        AppError::Unauthorized("Invalid or expired token".to_string())
    })?;

    debug!("[AUTH] Authenticated user: {} (id: {})", claims.username, claims.sub);

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
