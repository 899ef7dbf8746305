//! Middleware layers composed into the request-handling chain.
//!
//! Two layers live here: the health check layer that answers orchestrator
//! probes before any routing happens, and the request ID layer that wraps
//! the whole chain in a correlation span.

pub mod health;
pub mod request_id;

pub use health::{health_check_layer, HEALTH_PATH};
pub use request_id::{request_id_layer, RequestId, REQUEST_ID_HEADER};
