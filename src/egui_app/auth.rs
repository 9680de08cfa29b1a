//! Authentication HTTP Client
//!
//! HTTP client functions for login, registration and token validation.
//! These block on a one-off runtime and are meant to be called from a
//! spawned thread; results travel back to the UI over a channel.

use reqwest::Client;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::egui_app::types::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserInfo, ValidateResponse,
};

/// Pull the server's failure message out of a non-success response
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<MessageResponse>().await {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => format!("request failed: {}", status),
    }
}

/// Login with email and password
///
/// Returns the issued token and the public user view.
pub fn login(config: &Config, email: String, password: String) -> Result<(String, UserInfo), String> {
    let client = Client::new();
    let url = config.api_url("/api/auth/login");

    let request = LoginRequest { email, password };

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            return Err(error_message(response).await);
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok((body.token, body.user))
    })
}

/// Register a new account
///
/// Registration issues no token; on success the caller switches to the
/// login flow. Returns the server's confirmation message.
pub fn register(
    config: &Config,
    username: String,
    email: String,
    password: String,
) -> Result<String, String> {
    let client = Client::new();
    let url = config.api_url("/api/auth/register");

    let request = RegisterRequest {
        username,
        email,
        password,
    };

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            return Err(error_message(response).await);
        }

        let body: MessageResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(body.message)
    })
}

/// Resolve a persisted token into a user
///
/// Any failure (network, expired, forged) means the token is no longer good;
/// the caller clears it and falls back to anonymous.
pub fn validate(config: &Config, token: &str) -> Result<UserInfo, String> {
    let client = Client::new();
    let url = config.api_url("/api/auth/validate");

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            return Err(error_message(response).await);
        }

        let body: ValidateResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(body.user)
    })
}
