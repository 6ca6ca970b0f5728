//! # User Repository
//!
//! Database access layer for user records, implementing the repository
//! pattern over plain SQL queries.
//!
//! Uniqueness of `username` and `email` is enforced twice: handlers pre-check
//! for precise error messages, and the UNIQUE constraints catch the insert
//! race. Repository methods surface constraint violations as `sqlx::Error`.

use sqlx::query_as;

use super::models::{ProfileUpdate, User, UserForCreate};
use super::DbPool;

/// User repository for database operations.
///
/// Methods are async and return `Result` for proper error handling; none of
/// them ever write `username`, `email`, or `password_hash` except [`create`].
///
/// [`create`]: UserRepository::create
pub struct UserRepository;

impl UserRepository {
    /// Find a user by ID.
    pub async fn find_by_id(pool: &DbPool, id: i64) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by their email address.
    ///
    /// Emails are stored lowercased; callers must lowercase before lookup.
    pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by their username.
    pub async fn find_by_username(
        pool: &DbPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Create a new user and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error` if the username or email already exists (UNIQUE
    /// constraint violation) or the connection fails.
    pub async fn create(pool: &DbPool, user_data: UserForCreate) -> Result<User, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO users (username, email, password_hash, first_name, last_name) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&user_data.username)
        .bind(&user_data.email)
        .bind(&user_data.password_hash)
        .bind(&user_data.first_name)
        .bind(&user_data.last_name)
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();

        query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Replace the profile names of a user and return the updated row.
    ///
    /// Only `first_name`, `last_name`, and `updated_at` are touched. A `None`
    /// field clears the stored value.
    pub async fn update_profile(
        pool: &DbPool,
        id: i64,
        update: ProfileUpdate,
    ) -> Result<User, sqlx::Error> {
        sqlx::query(
            "UPDATE users SET first_name = ?, last_name = ?, updated_at = CURRENT_TIMESTAMP \
             WHERE id = ?",
        )
        .bind(&update.first_name)
        .bind(&update.last_name)
        .bind(id)
        .execute(pool)
        .await?;

        query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Record a successful login: stamp `last_login` and bump `login_count`.
    ///
    /// Does not verify that the user exists; an unknown ID updates no rows.
    pub async fn record_login(pool: &DbPool, id: i64) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE users SET last_login = CURRENT_TIMESTAMP, login_count = login_count + 1 \
             WHERE id = ?",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Activate or deactivate an account.
    ///
    /// Deactivated users keep their record but fail login and token-based
    /// access with 403.
    pub async fn set_active(pool: &DbPool, id: i64, is_active: bool) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET is_active = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?")
            .bind(is_active)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete all users and return how many rows were removed.
    ///
    /// **WARNING**: destructive and irreversible. Only maintenance tooling
    /// (clear-users) calls this.
    pub async fn delete_all(pool: &DbPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users").execute(pool).await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_db() -> DbPool {
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

    fn alice() -> UserForCreate {
        UserForCreate::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$argon2id$stub-hash".to_string(),
        )
    }

    #[tokio::test]
    async fn create_and_find() {
        let pool = setup_test_db().await;

        let created = UserRepository::create(&pool, alice()).await.unwrap();
        assert_eq!(created.username, "alice");
        assert!(created.is_active);
        assert_eq!(created.login_count, 0);
        assert!(created.last_login.is_none());

        let by_email = UserRepository::find_by_email(&pool, "alice@example.com")
            .await
            .unwrap()
            .expect("user should be found by email");
        assert_eq!(by_email.id, created.id);

        let by_username = UserRepository::find_by_username(&pool, "alice")
            .await
            .unwrap()
            .expect("user should be found by username");
        assert_eq!(by_username.id, created.id);

        assert!(UserRepository::find_by_email(&pool, "nobody@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_username_rejected() {
        let pool = setup_test_db().await;
        UserRepository::create(&pool, alice()).await.unwrap();

        let mut dup = alice();
        dup.email = "other@example.com".to_string();
        let err = UserRepository::create(&pool, dup).await.unwrap_err();
        match err {
            sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("expected unique violation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn record_login_bumps_count_and_timestamp() {
        let pool = setup_test_db().await;
        let user = UserRepository::create(&pool, alice()).await.unwrap();

        UserRepository::record_login(&pool, user.id).await.unwrap();
        UserRepository::record_login(&pool, user.id).await.unwrap();

        let reloaded = UserRepository::find_by_id(&pool, user.id)
            .await
            .unwrap()
            .expect("user should exist");
        assert_eq!(reloaded.login_count, 2);
        assert!(reloaded.last_login.is_some());
    }

    #[tokio::test]
    async fn update_profile_touches_only_profile_fields() {
        let pool = setup_test_db().await;
        let user = UserRepository::create(&pool, alice()).await.unwrap();

        let updated = UserRepository::update_profile(
            &pool,
            user.id,
            ProfileUpdate::new(Some("Alice".to_string()), Some("Smith".to_string())),
        )
        .await
        .unwrap();

        assert_eq!(updated.first_name.as_deref(), Some("Alice"));
        assert_eq!(updated.last_name.as_deref(), Some("Smith"));
        assert_eq!(updated.full_name(), "Alice Smith");

        // Identity and credentials are untouched.
        assert_eq!(updated.username, user.username);
        assert_eq!(updated.email, user.email);
        assert_eq!(updated.password_hash, user.password_hash);

        // None clears the stored names.
        let cleared = UserRepository::update_profile(&pool, user.id, ProfileUpdate::default())
            .await
            .unwrap();
        assert!(cleared.first_name.is_none());
        assert!(cleared.last_name.is_none());
    }

    #[tokio::test]
    async fn set_active_and_delete_all() {
        let pool = setup_test_db().await;
        let user = UserRepository::create(&pool, alice()).await.unwrap();

        UserRepository::set_active(&pool, user.id, false)
            .await
            .unwrap();
        let reloaded = UserRepository::find_by_id(&pool, user.id)
            .await
            .unwrap()
            .expect("user should exist");
        assert!(!reloaded.is_active);

        let deleted = UserRepository::delete_all(&pool).await.unwrap();
        assert_eq!(deleted, 1);
        assert!(UserRepository::find_by_id(&pool, user.id)
            .await
            .unwrap()
            .is_none());
    }
}
