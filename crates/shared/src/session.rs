//! Admin session tokens using HS256 JWTs.
//!
//! The site has a small, fixed set of staff accounts, so sessions are plain
//! signed tokens carrying the admin user id. Roles are resolved from the
//! database on every request rather than baked into the token, so a role
//! change or account removal takes effect immediately.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error type for session token operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to encode session token: {0}")]
    Encoding(String),

    #[error("Session has expired")]
    Expired,

    #[error("Invalid session token")]
    Invalid,
}

/// Claims carried by a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: admin user id.
    pub sub: String,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
    /// Issued at (Unix timestamp).
    pub iat: i64,
    /// Unique token id.
    pub jti: String,
}

/// Default leeway in seconds for clock skew tolerance.
pub const DEFAULT_LEEWAY_SECS: u64 = 30;

/// Signs and validates admin session tokens.
#[derive(Clone)]
pub struct SessionKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// Session lifetime in seconds.
    pub session_expiry_secs: i64,
    /// Leeway in seconds for clock skew tolerance.
    pub leeway_secs: u64,
}

impl std::fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionKeys")
            .field("session_expiry_secs", &self.session_expiry_secs)
            .field("leeway_secs", &self.leeway_secs)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl SessionKeys {
    /// Creates session keys from a shared HMAC secret.
    pub fn new(secret: &str, session_expiry_secs: i64) -> Self {
        Self::with_leeway(secret, session_expiry_secs, DEFAULT_LEEWAY_SECS)
    }

    /// Creates session keys with a custom clock-skew leeway.
    pub fn with_leeway(secret: &str, session_expiry_secs: i64, leeway_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            session_expiry_secs,
            leeway_secs,
        }
    }

    /// Issues a session token for the given admin user id.
    ///
    /// Returns the encoded token and its jti.
    pub fn issue(&self, user_id: Uuid) -> Result<(String, String), SessionError> {
        let now = Utc::now();
        let jti = Uuid::new_v4().to_string();

        let claims = SessionClaims {
            sub: user_id.to_string(),
            exp: (now + Duration::seconds(self.session_expiry_secs)).timestamp(),
            iat: now.timestamp(),
            jti: jti.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| SessionError::Encoding(e.to_string()))?;

        Ok((token, jti))
    }

    /// Validates a session token and returns its claims.
    pub fn validate(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = self.leeway_secs;

        let data = decode::<SessionClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => SessionError::Expired,
                _ => SessionError::Invalid,
            }
        })?;

        Ok(data.claims)
    }
}

/// Extracts the admin user id from validated claims.
pub fn extract_user_id(claims: &SessionClaims) -> Result<Uuid, SessionError> {
    Uuid::parse_str(&claims.sub).map_err(|_| SessionError::Invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration as StdDuration;

    fn test_keys() -> SessionKeys {
        SessionKeys::with_leeway("unit-test-session-secret", 3600, 0)
    }

    #[test]
    fn test_issue_and_validate_roundtrip() {
        let keys = test_keys();
        let user_id = Uuid::new_v4();

        let (token, jti) = keys.issue(user_id).unwrap();
        let claims = keys.validate(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.jti, jti);
    }

    #[test]
    fn test_expired_token_rejected() {
        let mut keys = test_keys();
        keys.session_expiry_secs = 1;
        let (token, _) = keys.issue(Uuid::new_v4()).unwrap();

        sleep(StdDuration::from_secs(2));

        assert!(matches!(keys.validate(&token), Err(SessionError::Expired)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let keys = test_keys();
        let (token, _) = keys.issue(Uuid::new_v4()).unwrap();

        let other = SessionKeys::with_leeway("a-different-secret", 3600, 0);
        assert!(matches!(other.validate(&token), Err(SessionError::Invalid)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let keys = test_keys();
        assert!(keys.validate("not.a.token").is_err());
        assert!(keys.validate("").is_err());
    }

    #[test]
    fn test_unique_jti_per_token() {
        let keys = test_keys();
        let user_id = Uuid::new_v4();
        let (_, jti1) = keys.issue(user_id).unwrap();
        let (_, jti2) = keys.issue(user_id).unwrap();
        assert_ne!(jti1, jti2);
    }

    #[test]
    fn test_extract_user_id() {
        let keys = test_keys();
        let user_id = Uuid::new_v4();
        let (token, _) = keys.issue(user_id).unwrap();
        let claims = keys.validate(&token).unwrap();
        assert_eq!(extract_user_id(&claims).unwrap(), user_id);
    }

    #[test]
    fn test_claims_timestamps() {
        let keys = test_keys();
        let before = Utc::now().timestamp();
        let (token, _) = keys.issue(Uuid::new_v4()).unwrap();
        let claims = keys.validate(&token).unwrap();

        assert!(claims.iat >= before);
        assert_eq!(claims.exp - claims.iat, keys.session_expiry_secs);
    }
}
