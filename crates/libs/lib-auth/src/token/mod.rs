//! # JWT Token Management
//!
//! JWT bearer token generation and validation. Tokens are signed with an
//! HMAC secret from configuration and carry the user identity in the claims.

use chrono::Duration;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use lib_utils::time::now_utc;
use serde::{Deserialize, Serialize};

use crate::AuthError;

/// JWT Claims structure containing user authentication information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Username
    pub username: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Parse the subject back into a user ID.
    ///
    /// Tokens are only ever minted with numeric subjects, so a parse failure
    /// means the token did not come from this service.
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

/// Encode a JWT token with user claims.
pub fn encode_jwt(
    user_id: i64,
    username: String,
    secret: &str,
    expiration_hours: i64,
) -> Result<String, AuthError> {
    let now = now_utc();
    let exp = now + Duration::hours(expiration_hours);

    let claims = Claims {
        sub: user_id.to_string(),
        username,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::TokenEncode(e.to_string()))
}

/// Decode and validate a JWT token.
///
/// The default `Validation` checks the signature and rejects expired tokens.
/// All failure modes collapse into [`AuthError::TokenInvalid`]; callers must
/// not leak why a token was rejected.
pub fn decode_jwt(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AuthError::TokenInvalid)?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-must-be-at-least-32-chars-long!";

    #[test]
    fn test_jwt_encoding_decoding() {
        let token = encode_jwt(1, "testuser".to_string(), SECRET, 24)
            .expect("JWT encoding should succeed");
        let claims = decode_jwt(&token, SECRET).expect("JWT decoding should succeed");

        assert_eq!(claims.sub, "1");
        assert_eq!(claims.user_id(), Some(1));
        assert_eq!(claims.username, "testuser");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_jwt_wrong_secret_rejected() {
        let token = encode_jwt(1, "testuser".to_string(), SECRET, 24)
            .expect("JWT encoding should succeed");
        let result = decode_jwt(&token, "another-secret-that-is-also-32-chars!!");
        assert!(matches!(result, Err(AuthError::TokenInvalid)));
    }

    #[test]
    fn test_jwt_expired_rejected() {
        // Issued with a negative lifetime, so exp is already in the past.
        let token = encode_jwt(1, "testuser".to_string(), SECRET, -1)
            .expect("JWT encoding should succeed");
        let result = decode_jwt(&token, SECRET);
        assert!(matches!(result, Err(AuthError::TokenInvalid)));
    }

    #[test]
    fn test_jwt_garbage_rejected() {
        let result = decode_jwt("not.a.token", SECRET);
        assert!(matches!(result, Err(AuthError::TokenInvalid)));
    }
}
