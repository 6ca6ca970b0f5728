use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// User entity representing a complete user record from the database.
///
/// `password_hash` never leaves the backend; response DTOs are built from the
/// other fields only.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub login_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Display name: "first last" when both profile names are set, otherwise
    /// the username.
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            _ => self.username.clone(),
        }
    }
}

/// Data required to create a new user.
///
/// The password must already be hashed (`lib_auth::hash_password`); this
/// layer never sees plaintext.
#[derive(Debug, Clone)]
pub struct UserForCreate {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserForCreate {
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            username,
            email,
            password_hash,
            first_name: None,
            last_name: None,
        }
    }

    /// Set the optional profile names.
    pub fn with_profile(mut self, first_name: Option<String>, last_name: Option<String>) -> Self {
        self.first_name = first_name;
        self.last_name = last_name;
        self
    }
}

/// Profile fields replaced by a profile update.
///
/// Deliberately contains no username, email, or password hash: the
/// profile-update path cannot alter identity or credentials by construction.
/// `None` clears the stored value (the update replaces both names wholesale).
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ProfileUpdate {
    pub fn new(first_name: Option<String>, last_name: Option<String>) -> Self {
        Self {
            first_name,
            last_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_names(first: Option<&str>, last: Option<&str>) -> User {
        User {
            id: 1,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
            avatar: None,
            is_active: true,
            last_login: None,
            login_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn full_name_uses_profile_when_complete() {
        let user = user_with_names(Some("Alice"), Some("Smith"));
        assert_eq!(user.full_name(), "Alice Smith");
    }

    #[test]
    fn full_name_falls_back_to_username() {
        assert_eq!(user_with_names(None, None).full_name(), "alice");
        assert_eq!(user_with_names(Some("Alice"), None).full_name(), "alice");
        assert_eq!(user_with_names(None, Some("Smith")).full_name(), "alice");
    }
}
