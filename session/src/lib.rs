//! # Session Client
//!
//! Client library for the auth backend: an HTTP [`ApiClient`] over reqwest
//! plus a [`Session`] that tracks the bearer token and the signed-in user.
//!
//! The session is the embedder's single entry point. It stores the token in
//! memory, attaches it to authenticated calls, and drops it whenever the
//! server answers 401, so a stale or revoked token can never get stuck.
//!
//! ```ignore
//! let mut session = Session::new(ApiClient::new("http://127.0.0.1:3001"));
//! session.login("alice@example.com", "secret-password").await?;
//! let user = session.user().unwrap();
//! ```

pub mod api;
pub mod session;
pub mod store;

pub use api::client::ApiClient;
pub use api::ApiError;
pub use session::{AuthApi, Session};
pub use store::{MemoryStore, SessionStore};
