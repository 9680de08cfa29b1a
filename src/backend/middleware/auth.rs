//! Authorization Middleware
//!
//! Gate for protected routes. Every protected request must carry a session
//! token, either as `Authorization: Bearer <token>` or as the `token`
//! cookie; both transports are accepted uniformly on every protected
//! endpoint.
//!
//! The middleware trusts the signature alone and performs no database
//! lookup, so a credential record deleted after issuance keeps working until
//! the token expires. Downstream handlers consume the injected
//! [`AuthenticatedUser`] without re-verifying anything.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::cookie::extract_token_cookie;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::AuthError;

/// Authenticated identity extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub username: String,
    pub role: String,
}

/// Extract the token from the Authorization header (format: "Bearer <token>")
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}

/// Authorization middleware for protected routes
///
/// 1. Takes the token from the bearer header or the `token` cookie
/// 2. Verifies signature and expiry against the session keys
/// 3. Attaches [`AuthenticatedUser`] to the request extensions
///
/// Missing, malformed, forged and expired tokens all answer
/// `401 {success:false, message:"unauthorized"}`.
pub async fn require_auth(
    State(keys): State<SessionKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = bearer_token(request.headers())
        .or_else(|| extract_token_cookie(request.headers()))
        .ok_or(AuthError::MissingToken)?;

    let claims = keys.verify(&token)?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
        username: claims.username,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter on routes layered with [`require_auth`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or(AuthError::MissingToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_requires_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("abc.def.ghi"));
        assert!(bearer_token(&headers).is_none());
        assert!(bearer_token(&HeaderMap::new()).is_none());
    }
}
