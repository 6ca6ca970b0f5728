//! # User Endpoints
//!
//! Authenticated calls for the current user's record and profile.

use shared::{UpdateProfileRequest, UserResponse};

use super::client::ApiClient;
use super::{parse_response, ApiError};

/// Fetch the user record behind a token.
pub async fn current_user(client: &ApiClient, token: &str) -> Result<UserResponse, ApiError> {
    let response = client
        .client
        .get(format!("{}/api/user", client.base_url()))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    parse_response(response).await
}

/// Replace the current user's profile names.
#[tracing::instrument(skip(client, token, request))]
pub async fn update_profile(
    client: &ApiClient,
    token: &str,
    request: UpdateProfileRequest,
) -> Result<UserResponse, ApiError> {
    tracing::info!("Updating profile");

    let response = client
        .client
        .put(format!("{}/api/user/profile", client.base_url()))
        .bearer_auth(token)
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Profile update network error");
            ApiError::Network(e.to_string())
        })?;

    parse_response(response).await
}
