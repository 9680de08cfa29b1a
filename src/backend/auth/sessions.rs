//! Session Tokens
//!
//! JWT issuance and verification for user sessions. Tokens are compact,
//! self-contained and signed with a single server-held secret; there is no
//! server-side session state and no revocation list, so rotating the secret
//! is the only way to invalidate outstanding tokens before they expire.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::backend::auth::users::User;
use crate::backend::error::AuthError;

/// Token lifetime: 24 hours from issuance
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Username
    pub username: String,
    /// Authorization role
    pub role: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Seconds since the Unix epoch
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs())
        .unwrap_or_default()
}

/// Signing and verification keys for session tokens
///
/// Constructed once at startup from the configured secret and handed to the
/// auth service and the authorization middleware through application state;
/// nothing in this module reads the environment.
#[derive(Clone)]
pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl SessionKeys {
    /// Create keys from a shared secret and a token lifetime in seconds
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Issue a signed token for a user
    ///
    /// Claims carry {subject id, email, username, role} plus the embedded
    /// expiry. Tokens are immutable once issued.
    pub fn issue(&self, user: &User) -> Result<String, AuthError> {
        let now = unix_now();

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            username: user.username.clone(),
            role: user.role.clone(),
            exp: now + self.ttl_secs,
            iat: now,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify a token and return its claims
    ///
    /// Fails with `InvalidToken` when the signature does not match, the
    /// payload is malformed, or the embedded expiry has elapsed. Callers
    /// never learn which.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::debug!("token rejected: {}", err);
                AuthError::InvalidToken
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn test_keys() -> SessionKeys {
        SessionKeys::new("unit-test-secret", TOKEN_TTL_SECS)
    }

    fn test_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            password_hash: "$2b$12$fakehash".to_string(),
            role: "user".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_issue_then_verify_roundtrips_claims() {
        let keys = test_keys();
        let user = test_user();

        let token = keys.issue(&user).unwrap();
        let claims = keys.verify(&token).unwrap();

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.username, user.username);
        assert_eq!(claims.role, user.role);
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let keys = test_keys();
        let forger = SessionKeys::new("some-other-secret", TOKEN_TTL_SECS);

        let token = forger.issue(&test_user()).unwrap();
        assert!(matches!(
            keys.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let keys = test_keys();
        let token = keys.issue(&test_user()).unwrap();

        // Swap in the signature of a different token.
        let other = keys.issue(&test_user()).unwrap();
        let payload = token.rsplit_once('.').unwrap().0;
        let foreign_signature = other.rsplit_once('.').unwrap().1;
        let tampered = format!("{payload}.{foreign_signature}");

        assert!(matches!(
            keys.verify(&tampered),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let keys = test_keys();
        let user = test_user();
        let now = unix_now();

        // Expired two hours ago, well past any validation leeway.
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            username: user.username.clone(),
            role: user.role.clone(),
            exp: now - 7200,
            iat: now - 7200 - TOKEN_TTL_SECS,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).unwrap();

        assert!(matches!(
            keys.verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_malformed_token_is_rejected() {
        let keys = test_keys();
        assert!(matches!(
            keys.verify("not.a.token"),
            Err(AuthError::InvalidToken)
        ));
        assert!(matches!(keys.verify(""), Err(AuthError::InvalidToken)));
    }
}
