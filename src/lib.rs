//! Vigil: liveness probe middleware for axum services.
//!
//! The heart of the crate is [`middleware::health_check_layer`], a layer
//! that answers container-orchestrator probes at a fixed path before any
//! routing happens. The rest of the crate wraps that layer into a
//! standalone responder binary: configuration, logging, and a minimal
//! HTTP server with graceful shutdown.
//!
//! Library users compose the layer into their own application:
//!
//! ```no_run
//! use axum::{middleware::from_fn, Router};
//! use vigil::middleware::health_check_layer;
//!
//! let app: Router = Router::new().layer(from_fn(health_check_layer));
//! ```

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use middleware::{health_check_layer, HEALTH_PATH};
