//! Health check middleware for container orchestration probes.
//!
//! Answers requests for /_health with 200 OK before any routing happens, so
//! liveness and readiness checks keep working no matter what routes the
//! surrounding application registers. Used by Kubernetes, ECS, systemd, and
//! load balancers to verify the process is alive and able to serve traffic.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Probe path answered by [`health_check_layer`].
///
/// Compiled in on purpose: orchestrator manifests hardcode the probe path,
/// and a configurable one invites drift between the manifest and the
/// process. Matching is strict equality on the path component.
pub const HEALTH_PATH: &str = "/_health";

/// Middleware that answers liveness/readiness probes.
///
/// Requests whose path equals [`HEALTH_PATH`] are answered directly with
/// `200 OK` and the body `{"status":"ok"}`, and the rest of the chain is
/// never invoked. The comparison is case-sensitive and does not normalize
/// trailing slashes; the query string is not part of the path and does not
/// affect matching. Every other request is delegated to `next` and its
/// response returned untouched.
///
/// The probe deliberately checks nothing beyond the process itself. A
/// process that can run this function is alive, and that is the whole
/// contract.
pub async fn health_check_layer(request: Request, next: Next) -> Response {
    if request.uri().path() == HEALTH_PATH {
        return (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response();
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use axum::http::{Method, Request, StatusCode};
    use axum::middleware::from_fn;
    use axum::routing::get;
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    /// Router whose entire downstream is a spy that counts how many times
    /// the rest of the chain runs, answering 404 like a bare router would.
    fn spy_router(hits: Arc<AtomicUsize>) -> Router {
        let downstream = move || {
            let hits = Arc::clone(&hits);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                StatusCode::NOT_FOUND
            }
        };
        Router::new()
            .fallback(downstream)
            .layer(from_fn(health_check_layer))
    }

    fn request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&bytes).expect("Response body was not JSON")
    }

    #[tokio::test]
    async fn test_probe_path_short_circuits_with_ok_body() {
        let hits = Arc::new(AtomicUsize::new(0));
        let router = spy_router(Arc::clone(&hits));

        let response = router
            .oneshot(request(Method::GET, "/_health"))
            .await
            .expect("Request should succeed");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(CONTENT_TYPE)
                .expect("Probe response should have a content type"),
            "application/json"
        );
        assert_eq!(body_json(response).await, json!({"status": "ok"}));
        assert_eq!(hits.load(Ordering::SeqCst), 0, "Downstream must not run");
    }

    #[tokio::test]
    async fn test_probe_matches_any_method() {
        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let hits = Arc::new(AtomicUsize::new(0));
            let router = spy_router(Arc::clone(&hits));

            let response = router
                .oneshot(request(method.clone(), "/_health"))
                .await
                .expect("Request should succeed");

            assert_eq!(response.status(), StatusCode::OK, "method {}", method);
            assert_eq!(hits.load(Ordering::SeqCst), 0, "method {}", method);
        }
    }

    #[tokio::test]
    async fn test_query_string_does_not_affect_matching() {
        let hits = Arc::new(AtomicUsize::new(0));
        let router = spy_router(Arc::clone(&hits));

        let response = router
            .oneshot(request(Method::GET, "/_health?probe=1"))
            .await
            .expect("Request should succeed");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "ok"}));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_near_miss_paths_pass_through() {
        for path in ["/_health/", "/health", "/_HEALTH", "/_Health"] {
            let hits = Arc::new(AtomicUsize::new(0));
            let router = spy_router(Arc::clone(&hits));

            let response = router
                .oneshot(request(Method::GET, path))
                .await
                .expect("Request should succeed");

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {}", path);
            assert_eq!(
                hits.load(Ordering::SeqCst),
                1,
                "Downstream must run exactly once for {}",
                path
            );
        }
    }

    #[tokio::test]
    async fn test_passthrough_returns_downstream_response_untouched() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let router = Router::new()
            .route(
                "/api/users",
                get(move || {
                    let hits = Arc::clone(&counter);
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        (StatusCode::OK, "user list")
                    }
                }),
            )
            .layer(from_fn(health_check_layer));

        let response = router
            .oneshot(request(Method::GET, "/api/users"))
            .await
            .expect("Request should succeed");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        assert_eq!(&bytes[..], b"user list");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_probe_is_idempotent() {
        let hits = Arc::new(AtomicUsize::new(0));
        let router = spy_router(Arc::clone(&hits));

        for _ in 0..3 {
            let response = router
                .clone()
                .oneshot(request(Method::GET, "/_health"))
                .await
                .expect("Request should succeed");

            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(body_json(response).await, json!({"status": "ok"}));
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
