//! Client Wire Types
//!
//! Client-side mirrors of the server's request and response shapes.

use serde::{Deserialize, Serialize};

/// User information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login response from the server
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub token: String,
    pub user: UserInfo,
}

/// Generic success/failure envelope
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Response from GET /api/auth/validate
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateResponse {
    pub user: UserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_parses() {
        let json = r#"{
            "success": true,
            "token": "abc.def.ghi",
            "user": {"id": "1", "username": "alice", "email": "alice@x.com", "role": "user"}
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.user.username, "alice");
    }

    #[test]
    fn test_failure_envelope_parses() {
        let json = r#"{"success": false, "message": "invalid email or password"}"#;
        let response: MessageResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert_eq!(response.message, "invalid email or password");
    }
}
