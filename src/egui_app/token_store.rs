//! Persisted Token Storage
//!
//! The client's only persisted session state: one opaque token string in a
//! file named `token` under the user's config directory. Absence of the file
//! means anonymous. The server is never consulted about this file; it is
//! written on login, read on startup, and removed on logout or when startup
//! validation fails.

use std::fs;
use std::path::PathBuf;

/// Storage key; doubles as the file name
const TOKEN_KEY: &str = "token";

/// File-backed store for the session token
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store under the platform config directory (e.g. `~/.config/fintrack`)
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(std::env::temp_dir);
        Self {
            path: base.join("fintrack").join(TOKEN_KEY),
        }
    }

    /// Store at an explicit path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted token, if any
    pub fn load(&self) -> Option<String> {
        let token = fs::read_to_string(&self.path).ok()?;
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        Some(token.to_string())
    }

    /// Persist a token, replacing any previous one
    pub fn save(&self, token: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    /// Remove the persisted token; missing file is fine
    pub fn clear(&self) {
        let _ = fs::remove_file(&self.path);
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, TokenStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::with_path(dir.path().join("token"));
        (dir, store)
    }

    #[test]
    fn test_load_missing_is_none() {
        let (_dir, store) = temp_store();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, store) = temp_store();
        store.save("abc.def.ghi").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_clear_removes_token() {
        let (_dir, store) = temp_store();
        store.save("abc.def.ghi").unwrap();
        store.clear();
        assert!(store.load().is_none());

        // Clearing again is a no-op
        store.clear();
    }

    #[test]
    fn test_empty_file_is_anonymous() {
        let (_dir, store) = temp_store();
        store.save("  \n").unwrap();
        assert!(store.load().is_none());
    }
}
