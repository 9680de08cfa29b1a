//! Auth Service
//!
//! Orchestrates registration and login against the credential store, the
//! password hasher and the token issuer. The service is constructed once at
//! startup with its store handle and signing keys; handlers reach it through
//! application state.

use std::sync::Arc;

use crate::backend::auth::passwords::{hash_password, verify_password};
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::store::CredentialStore;
use crate::backend::auth::users::{NewUser, User};
use crate::backend::error::AuthError;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Registration and login orchestration
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    keys: SessionKeys,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, keys: SessionKeys) -> Self {
        Self { store, keys }
    }

    /// Register a new user
    ///
    /// Validates the input, hashes the password and persists the credential
    /// record. There is deliberately no duplicate pre-check: the store's
    /// uniqueness constraint decides concurrent duplicate registrations and
    /// the losing writer gets `DuplicateUser`. Returns no token; the caller
    /// logs in afterwards.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if !is_valid_username(username) {
            return Err(AuthError::validation(
                "username",
                "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
            ));
        }

        if !email.contains('@') {
            return Err(AuthError::validation("email", "Invalid email format"));
        }

        if password.len() < 8 {
            return Err(AuthError::validation(
                "password",
                "Password must be at least 8 characters",
            ));
        }

        let password_hash = hash_password(password)?;

        let user = self
            .store
            .insert_user(NewUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        tracing::info!("user registered: {} ({})", user.username, user.email);
        Ok(user)
    }

    /// Authenticate a user and issue a session token
    ///
    /// `UnknownUser` and `BadCredentials` stay distinct here for logging;
    /// both collapse to the same 401 message at the response boundary.
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), AuthError> {
        let user = self
            .store
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UnknownUser)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::BadCredentials);
        }

        let token = self.keys.issue(&user)?;

        tracing::info!("user logged in: {} ({})", user.username, user.email);
        Ok((token, user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::sessions::TOKEN_TTL_SECS;
    use crate::backend::auth::store::MemoryCredentialStore;

    fn test_service() -> AuthService {
        AuthService::new(
            Arc::new(MemoryCredentialStore::new()),
            SessionKeys::new("unit-test-secret", TOKEN_TTL_SECS),
        )
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let service = test_service();

        service
            .register("alice", "alice@x.com", "secret12")
            .await
            .unwrap();

        let (token, user) = service.login("alice@x.com", "secret12").await.unwrap();
        assert!(!token.is_empty());
        assert_eq!(user.username, "alice");

        // The issued claims carry the registered identity.
        let keys = SessionKeys::new("unit-test-secret", TOKEN_TTL_SECS);
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.email, "alice@x.com");
        assert_eq!(claims.username, "alice");
    }

    #[tokio::test]
    async fn test_register_never_stores_plaintext() {
        let service = test_service();

        let user = service
            .register("alice", "alice@x.com", "secret12")
            .await
            .unwrap();
        assert_ne!(user.password_hash, "secret12");
        assert!(!user.password_hash.contains("secret12"));
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_rejected() {
        let service = test_service();

        service
            .register("alice", "alice@x.com", "secret12")
            .await
            .unwrap();
        let result = service.register("bob", "alice@x.com", "secret34").await;
        assert!(matches!(result, Err(AuthError::DuplicateUser)));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_fails() {
        let service = test_service();

        service
            .register("alice", "alice@x.com", "secret12")
            .await
            .unwrap();
        let result = service.login("alice@x.com", "wrong").await;
        assert!(matches!(result, Err(AuthError::BadCredentials)));
    }

    #[tokio::test]
    async fn test_login_with_unknown_email_fails() {
        let service = test_service();

        let result = service.login("nobody@x.com", "secret12").await;
        assert!(matches!(result, Err(AuthError::UnknownUser)));
    }

    #[tokio::test]
    async fn test_register_validation() {
        let service = test_service();

        // Username too short
        let result = service.register("ab", "a@x.com", "secret12").await;
        assert!(matches!(result, Err(AuthError::Shared(_))));

        // Email without '@'
        let result = service.register("alice", "not-an-email", "secret12").await;
        assert!(matches!(result, Err(AuthError::Shared(_))));

        // Password too short
        let result = service.register("alice", "a@x.com", "short").await;
        assert!(matches!(result, Err(AuthError::Shared(_))));
    }

    #[test]
    fn test_is_valid_username() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("alice_99"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("9alice"));
        assert!(!is_valid_username("alice!"));
        assert!(!is_valid_username(&"a".repeat(31)));
    }
}
