//! JWT service for session token generation and validation
//!
//! Issues HMAC-signed, time-bound tokens for the auth gate and validates
//! them on protected routes. A token is valid iff its signature checks out
//! and it has not expired; there is no server-side revocation, so logout
//! does not exist as a transition.

use anyhow::Result;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared secret for signing and verifying tokens
    pub secret: String,
    /// Access token expiration time in seconds (default: 30 minutes)
    pub access_token_expiry: u64,
}

impl JwtConfig {
    /// Create a new JwtConfig from environment variables
    ///
    /// # Environment Variables
    /// - `JWT_SECRET`: shared HMAC secret (defaults to a development value)
    /// - `JWT_ACCESS_TOKEN_EXPIRY`: access token expiry in seconds (default: 1800)
    pub fn from_env() -> Self {
        let secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "calculator-dev-secret".to_string());

        let access_token_expiry = env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .unwrap_or_else(|_| "1800".to_string())
            .parse()
            .unwrap_or(1800);

        JwtConfig {
            secret,
            access_token_expiry,
        }
    }
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject the token was issued for
    pub sub: String,
    /// Issued at time
    pub iat: u64,
    /// Expiration time
    pub exp: u64,
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_expiry: u64,
}

impl JwtService {
    /// Initialize a new JWT service
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        JwtService {
            encoding_key,
            decoding_key,
            validation,
            access_token_expiry: config.access_token_expiry,
        }
    }

    /// Generate an access token bound to a subject
    pub fn generate_access_token(&self, subject: &str) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| anyhow::anyhow!("Failed to get current time: {}", e))?
            .as_secs();

        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now + self.access_token_expiry,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?;
        Ok(token)
    }

    /// Validate a token and return the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry: 1800,
        })
    }

    #[test]
    fn test_token_round_trip() {
        let service = test_service();

        let token = service
            .generate_access_token("admin")
            .expect("token generation failed");
        let claims = service.validate_token(&token).expect("validation failed");

        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.exp, claims.iat + 1800);
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let service = test_service();

        assert!(service.validate_token("not-a-token").is_err());
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let service = test_service();
        let other = JwtService::new(JwtConfig {
            secret: "other-secret".to_string(),
            access_token_expiry: 1800,
        });

        let token = other
            .generate_access_token("admin")
            .expect("token generation failed");

        assert!(service.validate_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = test_service();

        // Forge claims that expired well past the default validation leeway.
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock before epoch")
            .as_secs();
        let claims = Claims {
            sub: "admin".to_string(),
            iat: now - 3600,
            exp: now - 600,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .expect("encoding failed");

        assert!(service.validate_token(&token).is_err());
    }
}
