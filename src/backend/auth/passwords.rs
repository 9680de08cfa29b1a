//! Password Hashing
//!
//! bcrypt wrappers for the two credential operations. The cost factor is
//! bcrypt's `DEFAULT_COST` (12); because bcrypt output self-describes its
//! parameters, the cost can be raised later without breaking verification of
//! hashes issued at the old cost.
//!
//! A verification *mismatch* is reported as `Ok(false)` and handled by the
//! caller as "credentials do not match"; only a malformed stored hash or an
//! internal bcrypt failure becomes an error.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::backend::error::AuthError;

/// Hash a plaintext password for storage
pub fn hash_password(plaintext: &str) -> Result<String, AuthError> {
    Ok(hash(plaintext, DEFAULT_COST)?)
}

/// Verify a plaintext password against a stored hash
pub fn verify_password(plaintext: &str, password_hash: &str) -> Result<bool, AuthError> {
    Ok(verify(plaintext, password_hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("secret1").unwrap();
        assert!(verify_password("secret1", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let hash = hash_password("secret1").unwrap();
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = hash_password("secret1").unwrap();
        assert_ne!(hash, "secret1");
        assert!(!hash.contains("secret1"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("secret1").unwrap();
        let second = hash_password("secret1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(verify_password("secret1", "not-a-bcrypt-hash").is_err());
    }
}
