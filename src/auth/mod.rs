use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config;

/// Claims carried by every token the server issues.
///
/// `jti` makes otherwise-identical tokens distinguishable; it is not
/// checked against any revocation list, so a token stays valid until
/// `exp` regardless of what happens to the account.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: Uuid,
    pub iss: String,
}

/// Token verification failures, reported without any partial claim data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature checked out but the token is past its expiry.
    #[error("Token expired.")]
    Expired,
    /// Bad signature or unparsable payload.
    #[error("Invalid token.")]
    Malformed,
    /// Anything else the decoder reports.
    #[error("Error decoding the token.")]
    Unknown,
}

/// Issues and verifies signed identity assertions.
///
/// Stateless: a pure function of the configured secret and its input.
/// Construct once per request site via [`TokenCodec::from_config`]; tests
/// build it directly with their own secret and lifetime.
pub struct TokenCodec {
    secret: String,
    issuer: String,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: impl Into<String>, issuer: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
            ttl,
        }
    }

    pub fn from_config() -> Self {
        let security = &config::config().security;
        Self::new(
            security.jwt_secret.clone(),
            security.jwt_issuer.clone(),
            Duration::days(security.jwt_expiry_days),
        )
    }

    /// Sign a fresh token asserting `username`'s identity.
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            jti: Uuid::new_v4(),
            iss: self.issuer.clone(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|_| TokenError::Unknown)
    }

    /// Check signature and expiry, returning the embedded username.
    ///
    /// The account's continued existence is deliberately not re-checked
    /// here; identity resolution and account lifecycle are decoupled.
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims.username)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            jsonwebtoken::errors::ErrorKind::InvalidToken
            | jsonwebtoken::errors::ErrorKind::InvalidSignature
            | jsonwebtoken::errors::ErrorKind::Base64(_)
            | jsonwebtoken::errors::ErrorKind::Json(_)
            | jsonwebtoken::errors::ErrorKind::Utf8(_) => TokenError::Malformed,
            _ => TokenError::Unknown,
        })
    }

    /// Decode without verifying expiry. Used by tests to inspect claims.
    #[cfg(test)]
    fn decode_claims(&self, token: &str) -> Claims {
        let mut validation = Validation::default();
        validation.validate_exp = false;
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .expect("claims decode")
        .claims
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new("test-secret", "AASTU-SpaceWiki", Duration::days(7))
    }

    #[test]
    fn issue_then_verify_resolves_username() {
        let codec = codec();
        let token = codec.issue("nova").unwrap();
        assert_eq!(codec.verify(&token).unwrap(), "nova");
    }

    #[test]
    fn claims_carry_issuer_and_week_long_window() {
        let codec = codec();
        let token = codec.issue("nova").unwrap();
        let claims = codec.decode_claims(&token);
        assert_eq!(claims.iss, "AASTU-SpaceWiki");
        assert_eq!(claims.username, "nova");
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn jti_differs_between_tokens() {
        let codec = codec();
        let a = codec.decode_claims(&codec.issue("nova").unwrap());
        let b = codec.decode_claims(&codec.issue("nova").unwrap());
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        // A non-positive lifetime puts exp in the past at issue time
        let codec = TokenCodec::new("test-secret", "AASTU-SpaceWiki", Duration::days(-1));
        let token = codec.issue("nova").unwrap();
        assert_eq!(codec.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn foreign_secret_is_rejected_as_malformed() {
        let other = TokenCodec::new("other-secret", "AASTU-SpaceWiki", Duration::days(7));
        let token = other.issue("nova").unwrap();
        assert_eq!(codec().verify(&token), Err(TokenError::Malformed));
    }

    #[test]
    fn garbage_is_rejected_as_malformed() {
        assert_eq!(codec().verify("not-a-token"), Err(TokenError::Malformed));
        assert_eq!(codec().verify(""), Err(TokenError::Malformed));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let codec = codec();
        let token = codec.issue("nova").unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = "eyJ1c2VybmFtZSI6ImV2ZSJ9";
        parts[1] = forged;
        let tampered = parts.join(".");
        assert!(codec.verify(&tampered).is_err());
    }
}
