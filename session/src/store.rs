//! # Token Persistence
//!
//! Seam between the session and wherever the embedder keeps tokens across
//! runs (keychain, config file, browser storage behind a shim). The default
//! [`MemoryStore`] keeps the token for the process lifetime only.

/// Storage for the bearer token.
pub trait SessionStore: Send + Sync {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;

    /// Persist a freshly issued token.
    fn save(&mut self, token: &str);

    /// Discard the persisted token.
    fn clear(&mut self);
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a token, as if persisted by an earlier run.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn save(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    fn clear(&mut self) {
        self.token = None;
    }
}
