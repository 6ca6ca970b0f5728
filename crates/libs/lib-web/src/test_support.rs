//! Shared fixtures for handler tests: in-memory database, test config, and
//! a router built through the real wiring (middleware included).

use axum::response::Response;
use axum::Router;
use lib_auth::hash_password;
use lib_core::config::init_config_with;
use lib_core::model::store::{User, UserForCreate, UserRepository};
use lib_core::{Config, DbPool};
use sqlx::sqlite::SqlitePoolOptions;

use crate::server::{create_router, AppState};

/// Setup test database with the users schema.
pub async fn setup_test_db() -> DbPool {
    let pool = SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            first_name TEXT,
            last_name TEXT,
            avatar TEXT,
            is_active BOOLEAN NOT NULL DEFAULT 1,
            last_login TIMESTAMP,
            login_count INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create users table");

    pool
}

/// Create test config.
pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret-key-must-be-at-least-32-characters-long!".to_string(),
        jwt_expiration_hours: 24,
    }
}

/// Build the application router over a test pool.
///
/// Seeds the process-wide config read by the auth middleware. Every test
/// uses the same values, so seeding again from another test is a no-op.
pub fn test_app(pool: DbPool, config: Config) -> Router {
    let _ = init_config_with(config.clone());

    create_router(
        AppState {
            db: pool,
            config,
        },
        Vec::new(),
    )
}

/// Insert a user directly through the repository, bypassing the handlers.
pub async fn seed_user(pool: &DbPool, username: &str, email: &str, password: &str) -> User {
    let password_hash = hash_password(password).expect("Password hashing should succeed in test");

    UserRepository::create(
        pool,
        UserForCreate::new(username.to_string(), email.to_string(), password_hash),
    )
    .await
    .expect("User creation should succeed in test")
}

/// Deserialize a response body as JSON.
pub async fn response_json<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&body).expect("Response body should be valid JSON")
}
