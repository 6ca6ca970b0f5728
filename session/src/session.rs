//! # Session State
//!
//! The [`Session`] owns the bearer token and the signed-in user's record,
//! and funnels every authenticated call through them. A 401 from any call
//! clears both, so the embedder never keeps presenting a dead token.
//!
//! [`AuthApi`] is the seam between the session and the HTTP layer; tests
//! drive the session against a mock instead of a live backend.

use async_trait::async_trait;
use shared::{
    AuthResponse, LogoutResponse, SignupRequest, UpdateProfileRequest, UserInfo, UserResponse,
};
use tracing::{info, warn};

use crate::api::{self, client::ApiClient, ApiError};
use crate::store::{MemoryStore, SessionStore};

/// Trait for the auth API operations, enabling mocking in tests.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Login with email or username and password.
    async fn login(
        &self,
        email_or_username: String,
        password: String,
    ) -> Result<AuthResponse, ApiError>;

    /// Sign up a new user.
    async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, ApiError>;

    /// Record a logout on the server.
    async fn logout(&self, token: &str) -> Result<LogoutResponse, ApiError>;

    /// Fetch the user record behind a token.
    async fn current_user(&self, token: &str) -> Result<UserResponse, ApiError>;

    /// Replace the current user's profile names.
    async fn update_profile(
        &self,
        token: &str,
        request: UpdateProfileRequest,
    ) -> Result<UserResponse, ApiError>;
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(
        &self,
        email_or_username: String,
        password: String,
    ) -> Result<AuthResponse, ApiError> {
        api::auth::login(self, email_or_username, password).await
    }

    async fn signup(&self, request: SignupRequest) -> Result<AuthResponse, ApiError> {
        api::auth::signup(self, request).await
    }

    async fn logout(&self, token: &str) -> Result<LogoutResponse, ApiError> {
        api::auth::logout(self, token).await
    }

    async fn current_user(&self, token: &str) -> Result<UserResponse, ApiError> {
        api::user::current_user(self, token).await
    }

    async fn update_profile(
        &self,
        token: &str,
        request: UpdateProfileRequest,
    ) -> Result<UserResponse, ApiError> {
        api::user::update_profile(self, token, request).await
    }
}

/// Authentication session over an [`AuthApi`].
///
/// Not thread-safe by itself; wrap it in the embedder's own lock if it is
/// shared across tasks.
pub struct Session<A: AuthApi> {
    api: A,
    store: Box<dyn SessionStore>,
    token: Option<String>,
    user: Option<UserInfo>,
}

impl<A: AuthApi> Session<A> {
    /// Create an unauthenticated session with an in-memory token store.
    pub fn new(api: A) -> Self {
        Self::with_store(api, Box::new(MemoryStore::new()))
    }

    /// Create a session over the embedder's own token store.
    ///
    /// Call [`Session::bootstrap`] afterwards to pick up a token the store
    /// persisted from an earlier run.
    pub fn with_store(api: A, store: Box<dyn SessionStore>) -> Self {
        Self {
            api,
            store,
            token: None,
            user: None,
        }
    }

    /// Whether a user is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    /// The bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Restore a session from the token store.
    ///
    /// Returns `Ok(true)` when a persisted token still resolves to a user,
    /// `Ok(false)` when there was no token or the server rejected it (a
    /// rejected token is discarded). A network failure keeps the token for
    /// a later retry and surfaces as `Err`.
    pub async fn bootstrap(&mut self) -> Result<bool, ApiError> {
        let Some(token) = self.store.load() else {
            return Ok(false);
        };

        let result = self.api.current_user(&token).await;
        self.token = Some(token);

        match result {
            Ok(response) => {
                info!(username = %response.user.username, "Session restored");
                self.user = Some(response.user);
                Ok(true)
            }
            Err(ApiError::Unauthorized) => {
                info!("Persisted token rejected, discarding");
                self.forget();
                Ok(false)
            }
            Err(e) => {
                warn!(error = %e, "Session restore failed, keeping token");
                Err(e)
            }
        }
    }

    /// Login and store the issued token and user.
    pub async fn login(
        &mut self,
        email_or_username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<UserInfo, ApiError> {
        let response = self
            .api
            .login(email_or_username.into(), password.into())
            .await?;

        self.remember(response.token);
        self.user = Some(response.user.clone());

        Ok(response.user)
    }

    /// Sign up and store the issued token and user.
    pub async fn signup(&mut self, request: SignupRequest) -> Result<UserInfo, ApiError> {
        let response = self.api.signup(request).await?;

        self.remember(response.token);
        self.user = Some(response.user.clone());

        Ok(response.user)
    }

    /// End the session.
    ///
    /// The local token and user are always cleared; the server-side logout
    /// call is best effort, since the token becoming unusable locally is
    /// what actually ends the session.
    pub async fn logout(&mut self) {
        if let Some(token) = self.token.clone() {
            if let Err(e) = self.api.logout(&token).await {
                warn!(error = %e, "Server logout call failed");
            }
        }
        self.forget();
    }

    /// Re-fetch the signed-in user's record.
    pub async fn refresh(&mut self) -> Result<UserInfo, ApiError> {
        let token = self.token.clone().ok_or(ApiError::Unauthorized)?;

        match self.api.current_user(&token).await {
            Ok(response) => {
                self.user = Some(response.user.clone());
                Ok(response.user)
            }
            Err(e) => {
                self.clear_if_unauthorized(&e);
                Err(e)
            }
        }
    }

    /// Replace the signed-in user's profile names and update the cached user.
    ///
    /// Absent or empty names clear the stored values; the update replaces
    /// both names wholesale.
    pub async fn update_profile(
        &mut self,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<UserInfo, ApiError> {
        let token = self.token.clone().ok_or(ApiError::Unauthorized)?;

        let request = UpdateProfileRequest {
            first_name,
            last_name,
        };

        match self.api.update_profile(&token, request).await {
            Ok(response) => {
                self.user = Some(response.user.clone());
                Ok(response.user)
            }
            Err(e) => {
                self.clear_if_unauthorized(&e);
                Err(e)
            }
        }
    }

    fn clear_if_unauthorized(&mut self, err: &ApiError) {
        if *err == ApiError::Unauthorized {
            info!("Token rejected by server, ending session");
            self.forget();
        }
    }

    fn remember(&mut self, token: String) {
        self.store.save(&token);
        self.token = Some(token);
    }

    fn forget(&mut self) {
        self.store.clear();
        self.token = None;
        self.user = None;
    }
}
