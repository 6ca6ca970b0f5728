//! # Environment Variables
//!
//! Typed access to environment variables. Configuration loading goes through
//! these helpers so a missing or malformed variable always reports its name.

use std::env;

/// Read a required environment variable.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Read an environment variable, falling back to a default when unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

// region: --- Error
#[derive(Debug)]
pub enum Error {
    MissingEnv(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MissingEnv(name) => write!(fmt, "Missing environment variable: {name}"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_applies_only_when_unset() {
        std::env::remove_var("FLOWGEN_TEST_UNSET");
        assert_eq!(get_env_or("FLOWGEN_TEST_UNSET", "fallback"), "fallback");

        std::env::set_var("FLOWGEN_TEST_SET", "value");
        assert_eq!(get_env_or("FLOWGEN_TEST_SET", "fallback"), "value");
    }

    #[test]
    fn missing_variable_reports_its_name() {
        std::env::remove_var("FLOWGEN_TEST_MISSING");
        let err = get_env("FLOWGEN_TEST_MISSING").unwrap_err();
        assert!(err.to_string().contains("FLOWGEN_TEST_MISSING"));
    }
}
