//! HTTP server startup and lifecycle.
//!
//! Plain-HTTP serving with graceful shutdown on SIGTERM/SIGINT. TLS
//! termination is the ingress's job in the deployments this responder is
//! built for, so there is no certificate handling here.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
