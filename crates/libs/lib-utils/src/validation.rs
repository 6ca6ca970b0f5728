//! # Validation Utilities
//!
//! Input validation for the identity fields. The rules here are the single
//! source of truth; handlers call these before touching the database.

/// Maximum length for first/last profile names.
pub const MAX_NAME_LEN: usize = 50;

/// Validate a username: 3-30 characters, letters, digits, or underscore.
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters".to_string());
    }
    if username.len() > 30 {
        return Err("Username cannot exceed 30 characters".to_string());
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err("Username can only contain letters, numbers, and underscores".to_string());
    }
    Ok(())
}

/// Validate email format: a local part, an `@`, and a dot in the domain.
///
/// Intentionally loose; the mailbox is the real validator. This only catches
/// values that cannot possibly be addresses.
pub fn validate_email(email: &str) -> Result<(), String> {
    let err = || "Invalid email format".to_string();

    let (local, domain) = email.split_once('@').ok_or_else(err)?;
    if local.is_empty() || domain.is_empty() {
        return Err(err());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(err());
    }
    if email.chars().any(char::is_whitespace) {
        return Err(err());
    }
    Ok(())
}

/// Validate an optional profile name (first or last): at most 50 characters.
pub fn validate_profile_name(value: &str, field_name: &str) -> Result<(), String> {
    if value.chars().count() > MAX_NAME_LEN {
        return Err(format!("{} cannot exceed {} characters", field_name, MAX_NAME_LEN));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rules() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("a_1").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username(&"x".repeat(31)).is_err());
        assert!(validate_username("bad name").is_err());
        assert!(validate_username("bad-name").is_err());
    }

    #[test]
    fn email_rules() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("user+tag@example.co.uk").is_ok());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("alice@nodot").is_err());
        assert!(validate_email("alice@.com").is_err());
        assert!(validate_email("spaced name@example.com").is_err());
    }

    #[test]
    fn profile_name_length() {
        assert!(validate_profile_name("Alice", "First name").is_ok());
        assert!(validate_profile_name("", "First name").is_ok());
        let too_long = "x".repeat(MAX_NAME_LEN + 1);
        let err = validate_profile_name(&too_long, "First name").unwrap_err();
        assert_eq!(err, "First name cannot exceed 50 characters");
    }
}
