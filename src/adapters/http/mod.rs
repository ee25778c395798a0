//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the full application: `/health`, and the venue API
//! under `/api` behind the authentication middleware.

pub mod middleware;
pub mod venue;

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::ports::SessionValidator;

pub use venue::{venue_router, VenueAppState};

/// Build the application router.
pub fn app_router(state: VenueAppState, validator: Arc<dyn SessionValidator>) -> Router {
    let api = Router::new()
        .merge(venue_router())
        .with_state(state)
        .layer(from_fn_with_state(validator, middleware::auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}
