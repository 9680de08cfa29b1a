//! Session State Machine
//!
//! Client-side session lifecycle:
//!
//! ```text
//!            validate ok
//! Resolving ─────────────► Authenticated(user)
//!     │                        ▲        │
//!     │ validate failed        │ login  │ logout
//!     ▼                        │        ▼
//! Anonymous ───────────────────┴──── Anonymous
//! ```
//!
//! The machine starts in `Resolving` only when a persisted token exists;
//! otherwise it starts in `Anonymous`. While `Resolving`, or while a login
//! or registration call is in flight (`busy`), no new auth call may start —
//! that serializes startup resolution against user-triggered logins and
//! makes double-submits no-ops.

use crate::egui_app::types::UserInfo;

/// Current session phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionPhase {
    /// Startup: a persisted token is being resolved into a user
    Resolving,
    /// Logged in
    Authenticated(UserInfo),
    /// Not logged in
    Anonymous,
}

/// Client session state
#[derive(Debug, Clone)]
pub struct Session {
    phase: SessionPhase,
    /// Error to render inline on the auth form
    error: Option<String>,
    /// Informational notice (e.g. "registered successfully")
    notice: Option<String>,
    /// A login/register network call is in flight
    busy: bool,
}

impl Session {
    /// Start in `Resolving` (a persisted token exists)
    pub fn resolving() -> Self {
        Self {
            phase: SessionPhase::Resolving,
            error: None,
            notice: None,
            busy: false,
        }
    }

    /// Start in `Anonymous` (no persisted token)
    pub fn anonymous() -> Self {
        Self {
            phase: SessionPhase::Anonymous,
            error: None,
            notice: None,
            busy: false,
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn user(&self) -> Option<&UserInfo> {
        match &self.phase {
            SessionPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated(_))
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self.phase, SessionPhase::Resolving)
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.notice = None;
    }

    /// Whether a new login/register call may start now
    ///
    /// False while startup resolution is pending or another call is in
    /// flight, so a stale result can never clobber a fresher one.
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.is_resolving()
    }

    /// Mark an auth call as started
    ///
    /// Returns false (and does nothing) when submission is not allowed.
    pub fn begin_call(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.busy = true;
        self.clear_messages();
        true
    }

    /// Apply the result of the startup token resolution
    ///
    /// A failure is silent: the UI just falls back to the auth view, it does
    /// not render the validation error.
    pub fn finish_resolve(&mut self, result: Result<UserInfo, String>) {
        self.phase = match result {
            Ok(user) => SessionPhase::Authenticated(user),
            Err(reason) => {
                tracing::debug!("session resolution failed: {}", reason);
                SessionPhase::Anonymous
            }
        };
    }

    /// Apply the result of a login call
    pub fn finish_login(&mut self, result: Result<UserInfo, String>) {
        self.busy = false;
        match result {
            Ok(user) => {
                self.clear_messages();
                self.phase = SessionPhase::Authenticated(user);
            }
            Err(error) => self.error = Some(error),
        }
    }

    /// Apply the result of a registration call
    ///
    /// Success does not authenticate: registration issues no token and the
    /// user logs in next.
    pub fn finish_register(&mut self, result: Result<String, String>) {
        self.busy = false;
        match result {
            Ok(message) => {
                self.error = None;
                self.notice = Some(if message.is_empty() {
                    "Registered successfully. Please log in.".to_string()
                } else {
                    format!("{}. Please log in.", message)
                });
            }
            Err(error) => self.error = Some(error),
        }
    }

    /// Log out: drop straight to `Anonymous`, no network call involved
    pub fn log_out(&mut self) {
        self.phase = SessionPhase::Anonymous;
        self.busy = false;
        self.clear_messages();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user() -> UserInfo {
        UserInfo {
            id: "1".to_string(),
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            role: "user".to_string(),
        }
    }

    #[test]
    fn test_resolution_success_authenticates() {
        let mut session = Session::resolving();
        session.finish_resolve(Ok(user()));
        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().username, "alice");
    }

    #[test]
    fn test_resolution_failure_is_silent_anonymous() {
        let mut session = Session::resolving();
        session.finish_resolve(Err("expired".to_string()));
        assert_eq!(*session.phase(), SessionPhase::Anonymous);
        // Silent redirect: no error rendered on the form.
        assert!(session.error().is_none());
    }

    #[test]
    fn test_no_login_while_resolving() {
        let mut session = Session::resolving();
        assert!(!session.can_submit());
        assert!(!session.begin_call());
        assert!(!session.is_busy());

        session.finish_resolve(Err("expired".to_string()));
        assert!(session.can_submit());
        assert!(session.begin_call());
    }

    #[test]
    fn test_double_submit_is_rejected() {
        let mut session = Session::anonymous();
        assert!(session.begin_call());
        // Second click while the first call is in flight.
        assert!(!session.begin_call());
    }

    #[test]
    fn test_login_failure_keeps_anonymous_with_error() {
        let mut session = Session::anonymous();
        session.begin_call();
        session.finish_login(Err("invalid email or password".to_string()));
        assert_eq!(*session.phase(), SessionPhase::Anonymous);
        assert_eq!(session.error(), Some("invalid email or password"));
        assert!(session.can_submit());
    }

    #[test]
    fn test_login_success_authenticates() {
        let mut session = Session::anonymous();
        session.begin_call();
        session.finish_login(Ok(user()));
        assert!(session.is_authenticated());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_register_success_does_not_authenticate() {
        let mut session = Session::anonymous();
        session.begin_call();
        session.finish_register(Ok("registered successfully".to_string()));
        assert_eq!(*session.phase(), SessionPhase::Anonymous);
        assert!(session.notice().unwrap().contains("log in"));
        assert!(session.can_submit());
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut session = Session::anonymous();
        session.begin_call();
        session.finish_login(Ok(user()));

        session.log_out();
        assert_eq!(*session.phase(), SessionPhase::Anonymous);
        assert!(session.error().is_none());
        assert!(!session.is_busy());
    }
}
