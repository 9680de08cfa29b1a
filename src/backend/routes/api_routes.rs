//! API Route Wiring
//!
//! Adds all API endpoints to the router. Public routes go in as-is;
//! protected routes sit in a sub-router layered with the authorization
//! middleware, so a single gate covers every route that needs an identity.

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::{login, logout, register, validate};
use crate::backend::investments::handlers::{
    create_investment, delete_investment, list_investments, update_investment,
};
use crate::backend::middleware::auth::require_auth;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// Public:
/// - `POST /api/auth/register`
/// - `POST /api/auth/login`
/// - `POST /api/auth/logout` (cookie clearing needs no valid token)
///
/// Protected (token required, bearer header or `token` cookie):
/// - `GET /api/auth/validate`
/// - `GET/POST /api/investments`
/// - `PUT/DELETE /api/investments/{id}`
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/validate", get(validate))
        .route(
            "/api/investments",
            get(list_investments).post(create_investment),
        )
        .route(
            "/api/investments/{id}",
            put(update_investment).delete(delete_investment),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_auth,
        ));

    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .merge(protected)
}
