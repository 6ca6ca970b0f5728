//! # Application Configuration
//!
//! Configuration loaded from environment variables and validated on startup
//! to fail fast when misconfigured.
//!
//! ## Global Config Access
//!
//! The config is initialized once at startup with [`init_config()`] and read
//! anywhere (notably the auth middleware) via [`core_config()`].

use std::sync::OnceLock;

use lib_utils::envs::{get_env, get_env_or};

/// Default SQLite location; kept under data/ so the file is easy to back up.
const DEFAULT_DATABASE_URL: &str = "sqlite:data/flowgen.db";

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,

    /// Secret key for JWT token signing and verification.
    ///
    /// Must be at least 32 characters long.
    pub jwt_secret: String,

    /// JWT token validity period in hours.
    ///
    /// After this period users must re-authenticate. Valid range: 1-720.
    pub jwt_expiration_hours: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `JWT_SECRET` is required; `DATABASE_URL` and `JWT_EXPIRATION_HOURS`
    /// have sensible defaults.
    pub fn from_env() -> Result<Self, String> {
        let database_url = get_env_or("DATABASE_URL", DEFAULT_DATABASE_URL);

        let jwt_secret =
            get_env("JWT_SECRET").map_err(|_| "JWT_SECRET must be set in environment".to_string())?;

        let jwt_expiration_hours = get_env_or("JWT_EXPIRATION_HOURS", "24")
            .parse()
            .map_err(|e| format!("JWT_EXPIRATION_HOURS must be a valid number: {}", e))?;

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration_hours,
        })
    }

    /// Validate configuration values against security rules.
    pub fn validate(&self) -> Result<(), String> {
        if self.jwt_secret.len() < 32 {
            return Err("JWT_SECRET must be at least 32 characters long".to_string());
        }

        if self.jwt_expiration_hours < 1 || self.jwt_expiration_hours > 720 {
            return Err("JWT_EXPIRATION_HOURS must be between 1 and 720 (30 days)".to_string());
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration from the environment.
///
/// Call once at application startup, before any handler or middleware that
/// needs configuration runs.
///
/// # Errors
///
/// Returns an error if environment variables are missing or invalid, if
/// validation fails, or if the config has already been initialized.
pub fn init_config() -> Result<(), String> {
    let config = Config::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| "Config has already been initialized".to_string())
}

/// Initialize the global configuration from an already-built [`Config`].
///
/// Used by tests and embedders that construct configuration programmatically.
pub fn init_config_with(config: Config) -> Result<(), String> {
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| "Config has already been initialized".to_string())
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn core_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Config must be initialized with init_config() before use")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "0123456789abcdef0123456789abcdef".to_string(),
            jwt_expiration_hours: 24,
        }
    }

    #[test]
    fn validate_accepts_sane_values() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_short_secret() {
        let mut config = valid_config();
        config.jwt_secret = "too-short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_expiration() {
        let mut config = valid_config();
        config.jwt_expiration_hours = 0;
        assert!(config.validate().is_err());

        config.jwt_expiration_hours = 721;
        assert!(config.validate().is_err());
    }
}
