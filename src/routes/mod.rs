//! HTTP route assembly for the probe responder.
//!
//! The router carries a single human-facing route at the root; every other
//! path falls through to the framework's 404. Probe traffic never reaches
//! the router at all, because the health layer answers it first. Both kinds
//! of response pass back through the request ID layer and get stamped with
//! a correlation header.

pub mod home;

use axum::{middleware, routing::get, Router};

use crate::middleware::{health_check_layer, request_id_layer};

/// Creates the axum router with the middleware chain applied.
///
/// Layer order matters here. The health layer sits directly above the
/// router so probes short-circuit before any routing happens, and the
/// request ID layer is outermost so its span also covers probe traffic.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home::index))
        // Probes are answered here, before the router sees them
        .layer(middleware::from_fn(health_check_layer))
        // Request ID middleware creates the root span for correlation
        .layer(middleware::from_fn(request_id_layer))
}
