//! Root route for anyone poking the responder by hand.

use crate::config::SERVICE_BANNER;

/// Serves a one-line banner identifying the service and its version.
///
/// Probes never reach this handler; it exists so a human hitting the
/// responder in a browser or with curl sees what is running.
pub async fn index() -> &'static str {
    SERVICE_BANNER
}
