//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // Endpoints used by the browser editor
    let editor_routes = Router::new()
        .route("/add-title", post(handlers::content::add_title))
        .route("/add-content", post(handlers::content::add_content))
        .route("/add-reference", post(handlers::content::add_reference))
        .route("/generate-rst", post(handlers::content::generate_rst));

    let api_routes = Router::new()
        .route("/api/format", post(handlers::api::format_fragment))
        .route("/api/insert", post(handlers::api::insert_fragment));

    Router::new()
        .merge(editor_routes)
        .merge(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
