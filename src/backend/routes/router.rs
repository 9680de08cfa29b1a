//! Router Configuration
//!
//! Assembles the application router: API routes, request tracing and the
//! 404 fallback.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    let router = router.layer(TraceLayer::new_for_http());

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    router.with_state(app_state)
}
