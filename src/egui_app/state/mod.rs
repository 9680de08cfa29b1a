//! Central application state shared across egui views.
//!
//! Owns the configuration, the token store and the session state machine.
//! Network calls run on spawned threads and report back over channels that
//! `poll_results` drains once per frame; a result arriving after its flow
//! was abandoned simply finds no receiver and is dropped.

use std::sync::mpsc::{channel, Receiver};

use crate::egui_app::auth;
use crate::egui_app::config::Config;
use crate::egui_app::session::Session;
use crate::egui_app::token_store::TokenStore;
use crate::egui_app::types::UserInfo;

pub struct AppState {
    pub config: Config,
    pub token_store: TokenStore,
    pub session: Session,
    pub email_input: String,
    pub username_input: String,
    pub password_input: String,
    pub confirm_password_input: String,
    pub is_register_mode: bool,
    resolve_result: Option<Receiver<Result<UserInfo, String>>>,
    login_result: Option<Receiver<Result<(String, UserInfo), String>>>,
    register_result: Option<Receiver<Result<String, String>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_token_store(TokenStore::new())
    }

    /// Build the state around an explicit token store
    ///
    /// On startup, a persisted token puts the session into `Resolving` and
    /// kicks off the validation call; no token means `Anonymous` right away.
    pub fn with_token_store(token_store: TokenStore) -> Self {
        let mut config = Config::new();

        let (session, resolve_result) = match token_store.load() {
            Some(token) => {
                config.set_token(Some(token.clone()));

                let request_config = config.clone();
                let (tx, rx) = channel();
                std::thread::spawn(move || {
                    let _ = tx.send(auth::validate(&request_config, &token));
                });

                (Session::resolving(), Some(rx))
            }
            None => (Session::anonymous(), None),
        };

        Self {
            config,
            token_store,
            session,
            email_input: String::new(),
            username_input: String::new(),
            password_input: String::new(),
            confirm_password_input: String::new(),
            is_register_mode: false,
            resolve_result,
            login_result: None,
            register_result: None,
        }
    }

    /// Drain finished network calls; called once per frame
    pub fn poll_results(&mut self) {
        if let Some(rx) = &self.resolve_result {
            if let Ok(result) = rx.try_recv() {
                self.resolve_result = None;
                if result.is_err() {
                    // The persisted token is stale or forged; drop it so the
                    // next startup goes straight to the auth view.
                    self.token_store.clear();
                    self.config.clear_token();
                }
                self.session.finish_resolve(result);
            }
        }

        if let Some(rx) = &self.login_result {
            if let Ok(result) = rx.try_recv() {
                self.login_result = None;
                match result {
                    Ok((token, user)) => {
                        if let Err(e) = self.token_store.save(&token) {
                            tracing::warn!("failed to persist session token: {}", e);
                        }
                        self.config.set_token(Some(token));
                        self.session.finish_login(Ok(user));
                        self.password_input.clear();
                        self.confirm_password_input.clear();
                    }
                    Err(error) => self.session.finish_login(Err(error)),
                }
            }
        }

        if let Some(rx) = &self.register_result {
            if let Ok(result) = rx.try_recv() {
                self.register_result = None;
                let registered = result.is_ok();
                self.session.finish_register(result);
                if registered {
                    // Back to the login form; email stays filled in.
                    self.is_register_mode = false;
                    self.password_input.clear();
                    self.confirm_password_input.clear();
                }
            }
        }
    }

    pub fn handle_login(&mut self) {
        if self.email_input.is_empty() || self.password_input.is_empty() {
            self.session.set_error("Email and password are required");
            return;
        }

        // Refused while startup resolution or another call is in flight.
        if !self.session.begin_call() {
            return;
        }

        let email = self.email_input.clone();
        let password = self.password_input.clone();
        let request_config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(auth::login(&request_config, email, password));
        });

        self.login_result = Some(rx);
    }

    pub fn handle_register(&mut self) {
        if self.username_input.is_empty() {
            self.session.set_error("Username is required");
            return;
        }

        if self.email_input.is_empty() || self.password_input.is_empty() {
            self.session.set_error("Email and password are required");
            return;
        }

        if !self.email_input.contains('@') || !self.email_input.contains('.') {
            self.session.set_error("Please enter a valid email address");
            return;
        }

        if self.password_input != self.confirm_password_input {
            self.session.set_error("Passwords do not match");
            return;
        }

        if !self.session.begin_call() {
            return;
        }

        let username = self.username_input.clone();
        let email = self.email_input.clone();
        let password = self.password_input.clone();
        let request_config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(auth::register(&request_config, username, email, password));
        });

        self.register_result = Some(rx);
    }

    /// Logout is purely local: clear the persisted token and the session.
    pub fn logout(&mut self) {
        self.token_store.clear();
        self.config.clear_token();
        self.session.log_out();
        self.email_input.clear();
        self.username_input.clear();
        self.password_input.clear();
        self.confirm_password_input.clear();
        self.is_register_mode = false;
    }

    pub fn toggle_auth_mode(&mut self) {
        self.is_register_mode = !self.is_register_mode;
        self.session.clear_messages();
        self.password_input.clear();
        self.confirm_password_input.clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::session::SessionPhase;

    fn state_without_token() -> AppState {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::with_path(dir.path().join("token"));
        // Leak the tempdir so the path stays valid for the test body.
        std::mem::forget(dir);
        AppState::with_token_store(store)
    }

    #[test]
    fn test_startup_without_token_is_anonymous() {
        let state = state_without_token();
        assert_eq!(*state.session.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn test_startup_with_token_resolves() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::with_path(dir.path().join("token"));
        store.save("some.stale.token").unwrap();

        let state = AppState::with_token_store(store);
        assert!(state.session.is_resolving());
        std::mem::forget(dir);
    }

    #[test]
    fn test_login_requires_inputs() {
        let mut state = state_without_token();
        state.handle_login();
        assert!(state.session.error().is_some());
        assert!(!state.session.is_busy());
    }

    #[test]
    fn test_register_rejects_password_mismatch() {
        let mut state = state_without_token();
        state.username_input = "alice".to_string();
        state.email_input = "alice@x.com".to_string();
        state.password_input = "secret12".to_string();
        state.confirm_password_input = "secret13".to_string();

        state.handle_register();
        assert_eq!(state.session.error(), Some("Passwords do not match"));
    }

    #[test]
    fn test_logout_clears_token_and_inputs() {
        let mut state = state_without_token();
        state.config.set_token(Some("tok".to_string()));
        state.email_input = "alice@x.com".to_string();

        state.logout();
        assert!(state.config.get_token().is_none());
        assert!(state.email_input.is_empty());
        assert_eq!(*state.session.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn test_toggle_auth_mode_clears_passwords() {
        let mut state = state_without_token();
        state.password_input = "secret12".to_string();
        state.toggle_auth_mode();
        assert!(state.is_register_mode);
        assert!(state.password_input.is_empty());
    }
}
