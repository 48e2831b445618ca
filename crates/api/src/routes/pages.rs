//! Route definitions for the server-rendered site.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes mounted at the root.
///
/// ```text
/// GET  /                -> index        (?category=&project=)
/// GET  /projects/{id}   -> open_project (redirects to the index deep link)
/// POST /contact         -> submit_contact_form
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/projects/{id}", get(pages::open_project))
        .route("/contact", post(pages::submit_contact_form))
}
