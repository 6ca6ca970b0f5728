//! # Authentication Endpoints
//!
//! Login, signup, and logout calls.

use shared::{AuthResponse, LoginRequest, LogoutResponse, SignupRequest};

use super::client::ApiClient;
use super::{parse_response, ApiError};

/// Login with email or username and password.
#[tracing::instrument(skip(client, password), fields(email_or_username = %email_or_username))]
pub async fn login(
    client: &ApiClient,
    email_or_username: String,
    password: String,
) -> Result<AuthResponse, ApiError> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let request = LoginRequest {
        email_or_username,
        password,
    };

    let response = client
        .client
        .post(format!("{}/api/auth/login", client.base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            ApiError::Network(e.to_string())
        })?;

    let status = response.status();
    let result = parse_response::<AuthResponse>(response).await;

    match &result {
        Ok(_) => tracing::info!(duration_ms = start.elapsed().as_millis(), "Login successful"),
        Err(e) => tracing::warn!(status = status.as_u16(), error = %e, "Login failed"),
    }

    result
}

/// Sign up a new user.
#[tracing::instrument(skip(client, request), fields(username = %request.username))]
pub async fn signup(client: &ApiClient, request: SignupRequest) -> Result<AuthResponse, ApiError> {
    tracing::info!("Attempting signup");

    let response = client
        .client
        .post(format!("{}/api/auth/signup", client.base_url()))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Signup network error");
            ApiError::Network(e.to_string())
        })?;

    parse_response(response).await
}

/// Record a logout on the server.
///
/// The backend keeps no session state; this call exists for the server-side
/// access log. Dropping the local token is the session's job either way.
pub async fn logout(client: &ApiClient, token: &str) -> Result<LogoutResponse, ApiError> {
    let response = client
        .client
        .post(format!("{}/api/auth/logout", client.base_url()))
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    parse_response(response).await
}
