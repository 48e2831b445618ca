pub mod contact;
pub mod health;
pub mod pages;
pub mod profile;
pub mod projects;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                 list, filtered by ?category= (GET)
/// /projects/{id}                            project with resolved media (GET)
/// /featured                                 featured projects (GET)
/// /categories                               filter bar values (GET)
/// /documents                                site-wide document library (GET)
/// /profile                                  about, skills, contact, slides (GET)
/// /contact                                  acknowledge a message (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .route("/featured", get(handlers::projects::list_featured))
        .route("/categories", get(handlers::projects::list_categories))
        .route("/documents", get(handlers::projects::list_documents))
        .nest("/profile", profile::router())
        .nest("/contact", contact::api_router())
}
