//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the session client (and any other
//! frontend) and the backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, signup, and token DTOs
//!   - **[`dto::user`]**: Current-user and profile-update DTOs
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None` (using `#[serde(skip_serializing_if = "Option::is_none")]`)
//! - All structs implement both `Serialize` and `Deserialize` for bidirectional communication
//!
//! ## Usage in Backend
//!
//! ```ignore
//! use shared::dto::auth::{LoginRequest, AuthResponse};
//! use axum::Json;
//!
//! async fn login(Json(request): Json<LoginRequest>) -> Json<AuthResponse> {
//!     // Request is automatically deserialized from JSON
//!     // Response is automatically serialized to JSON
//!     # todo!()
//! }
//! ```
//!
//! ## Usage in the Session Client
//!
//! ```ignore
//! use shared::dto::auth::{LoginRequest, AuthResponse};
//!
//! let request = LoginRequest {
//!     email_or_username: "alice".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let response: AuthResponse = reqwest::Client::new()
//!     .post("http://localhost:3001/api/auth/login")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! ```

pub mod dto;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
