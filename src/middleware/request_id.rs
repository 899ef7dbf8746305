//! Request correlation middleware.
//!
//! Generates a UUID v4 for each incoming request, wraps the rest of the
//! chain in a tracing span carrying it, and echoes it back to the client in
//! an `x-request-id` response header. Every log line emitted while the
//! request is in flight carries the request_id field, and clients can quote
//! the header when reporting a failed call.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use http::HeaderValue;
use tracing::Instrument;
use uuid::Uuid;

/// Response header carrying the generated request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request extension giving handlers access to the generated ID.
#[derive(Clone, Debug)]
pub struct RequestId(pub Uuid);

/// Middleware that assigns each request an ID and a tracing span.
///
/// Register this as the outermost layer so the span covers everything that
/// happens to the request, probe short-circuits included.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let id = Uuid::new_v4();
    let span = tracing::info_span!(
        "request",
        request_id = %id,
        method = %request.method(),
        path = request.uri().path(),
    );
    request.extensions_mut().insert(RequestId(id));

    let started = Instant::now();
    async move {
        let mut response = next.run(request).await;

        if let Ok(header) = HeaderValue::from_str(&id.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, header);
        }

        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
