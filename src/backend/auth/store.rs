//! Credential Store
//!
//! Persistence boundary for credential records. The store owns the password
//! hash for the record's lifetime and is the single authority on email
//! uniqueness: `insert_user` performs no lookup first, it inserts and maps a
//! unique violation to [`AuthError::DuplicateUser`]. Under concurrent
//! duplicate registrations the database (or the mutex, for the in-memory
//! store) picks the winner and the loser gets `DuplicateUser`.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::{NewUser, User, ROLE_USER};
use crate::backend::error::AuthError;

/// Persistence operations for credential records
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a new credential record
    ///
    /// Fails with `DuplicateUser` when the email is already taken.
    async fn insert_user(&self, new_user: NewUser) -> Result<User, AuthError>;

    /// Look up a credential record by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError>;

    /// Look up a credential record by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError>;
}

/// Returns `true` when `err` is a database unique-violation (SQLSTATE `23505`).
fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}

/// PostgreSQL-backed credential store
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn insert_user(&self, new_user: NewUser) -> Result<User, AuthError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, email, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, username, email, password_hash, role, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(ROLE_USER)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(err) if is_unique_violation(&err) => Err(AuthError::DuplicateUser),
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, email, password_hash, role, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

/// In-memory credential store
///
/// Same contract as the PostgreSQL store, with the mutex standing in for the
/// unique index: check-and-insert happens under one lock acquisition, so a
/// concurrent duplicate registration still has exactly one winner. Used by
/// the test suite; also usable for database-less local runs.
#[derive(Default)]
pub struct MemoryCredentialStore {
    users: std::sync::Mutex<Vec<User>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn insert_user(&self, new_user: NewUser) -> Result<User, AuthError> {
        let mut users = self.users.lock().expect("credential store lock poisoned");

        if users.iter().any(|user| user.email == new_user.email) {
            return Err(AuthError::DuplicateUser);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: ROLE_USER.to_string(),
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().expect("credential store lock poisoned");
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
        let users = self.users.lock().expect("credential store lock poisoned");
        Ok(users.iter().find(|user| user.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            username: "alice".to_string(),
            email: email.to_string(),
            password_hash: "$2b$12$fakehash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_by_email() {
        let store = MemoryCredentialStore::new();
        let user = store.insert_user(new_user("alice@x.com")).await.unwrap();
        assert_eq!(user.role, ROLE_USER);

        let found = store.find_by_email("alice@x.com").await.unwrap();
        assert_eq!(found.unwrap().id, user.id);

        let missing = store.find_by_email("bob@x.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let store = MemoryCredentialStore::new();
        store.insert_user(new_user("alice@x.com")).await.unwrap();

        let result = store.insert_user(new_user("alice@x.com")).await;
        assert!(matches!(result, Err(AuthError::DuplicateUser)));
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_has_one_winner() {
        let store = Arc::new(MemoryCredentialStore::new());

        let a = {
            let store = store.clone();
            tokio::spawn(async move { store.insert_user(new_user("race@x.com")).await })
        };
        let b = {
            let store = store.clone();
            tokio::spawn(async move { store.insert_user(new_user("race@x.com")).await })
        };

        let (a, b) = (a.await.unwrap(), b.await.unwrap());
        let winners = [&a, &b].iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);
        assert!([&a, &b]
            .iter()
            .any(|r| matches!(r, Err(AuthError::DuplicateUser))));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let store = MemoryCredentialStore::new();
        let user = store.insert_user(new_user("alice@x.com")).await.unwrap();

        let found = store.find_by_id(user.id).await.unwrap();
        assert_eq!(found.unwrap().email, "alice@x.com");

        let missing = store.find_by_id(Uuid::new_v4()).await.unwrap();
        assert!(missing.is_none());
    }
}
