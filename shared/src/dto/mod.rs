//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the session client and backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, signup, logout, and token DTOs
//! - [`user`] - Current-user lookup and profile-update DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "email_or_username": "alice",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "user": {
//!     "id": "1",
//!     "username": "alice",
//!     "email": "alice@example.com",
//!     "profile": {},
//!     "full_name": "alice",
//!     "created_at": "2024-01-01T00:00:00+00:00",
//!     "login_count": 1,
//!     "is_active": true
//!   },
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "message": "Login successful"
//! }
//! ```

pub mod auth;
pub mod user;

pub use auth::*;
pub use user::*;
