//! # API Endpoints
//!
//! HTTP calls against the backend API, one module per resource.

pub mod auth;
pub mod client;
pub mod user;

use thiserror::Error;

/// Client-side API error.
///
/// `Unauthorized` is separated from the other server rejections because the
/// session reacts to it by discarding the stored token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered 401; the token is invalid, expired, or missing.
    #[error("Unauthorized")]
    Unauthorized,

    /// The server rejected the request with an error message.
    #[error("{0}")]
    Api(String),

    /// The request never got a usable answer (connect, timeout, bad body).
    #[error("Network error: {0}")]
    Network(String),
}

/// Decode a backend response, mapping error statuses onto [`ApiError`].
pub(crate) async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();

    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to parse response: {}", e)));
    }

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }

    match response.json::<shared::ErrorResponse>().await {
        Ok(error) => Err(ApiError::Api(error.error)),
        Err(_) => Err(ApiError::Api(format!("Request failed with status {}", status))),
    }
}
