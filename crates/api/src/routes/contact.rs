use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// JSON contact routes mounted at `/api/v1/contact`.
///
/// ```text
/// POST /  -> submit_message
/// ```
pub fn api_router() -> Router<AppState> {
    Router::new().route("/", post(contact::submit_message))
}
