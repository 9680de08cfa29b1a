//! Token Cookie Helpers
//!
//! Cookie-based transport for the session token, alongside the bearer
//! header. The cookie is `HttpOnly` and not Secure-flagged; its max-age
//! matches the token lifetime so both expire together.

use axum::http::{header::COOKIE, HeaderMap};

use crate::backend::auth::sessions::TOKEN_TTL_SECS;

/// Cookie name for the session token
pub const TOKEN_COOKIE_NAME: &str = "token";

/// Build the `Set-Cookie` value carrying a freshly issued token
pub fn build_token_cookie(token: &str) -> String {
    format!(
        "{TOKEN_COOKIE_NAME}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={TOKEN_TTL_SECS}"
    )
}

/// Build the `Set-Cookie` value that clears the token cookie immediately
pub fn clear_token_cookie() -> String {
    format!("{TOKEN_COOKIE_NAME}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

/// Extract the session token from request cookies, if present
pub fn extract_token_cookie(headers: &HeaderMap) -> Option<String> {
    let cookie_header = headers.get(COOKIE)?;
    let cookie_str = cookie_header.to_str().ok()?;

    // Cookie header format: "name1=value1; name2=value2"
    for part in cookie_str.split(';') {
        let part = part.trim();
        if let Some(value) = part.strip_prefix(TOKEN_COOKIE_NAME) {
            if let Some(value) = value.strip_prefix('=') {
                return Some(value.trim().to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_token_cookie() {
        let headers = headers_with_cookie("token=abc.def.ghi");
        assert_eq!(
            extract_token_cookie(&headers).as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn test_extract_token_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; token=abc.def.ghi; lang=en");
        assert_eq!(
            extract_token_cookie(&headers).as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn test_missing_cookie_header() {
        assert!(extract_token_cookie(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_other_cookies_only() {
        let headers = headers_with_cookie("theme=dark; lang=en");
        assert!(extract_token_cookie(&headers).is_none());
    }

    #[test]
    fn test_build_and_clear_flags() {
        let set = build_token_cookie("abc");
        assert!(set.starts_with("token=abc"));
        assert!(set.contains("HttpOnly"));
        assert!(set.contains("Max-Age=86400"));

        let clear = clear_token_cookie();
        assert!(clear.starts_with("token=;"));
        assert!(clear.contains("Max-Age=0"));
    }
}
