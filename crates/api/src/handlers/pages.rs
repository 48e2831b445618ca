//! Handlers for the server-rendered site.

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use chrono::Datelike;
use folio_core::contact::{acknowledge, ContactMessage};
use folio_core::error::CoreError;

use crate::error::AppResult;
use crate::query::PageParams;
use crate::state::AppState;
use crate::views::{ContactFormView, IndexPage};

/// GET /?category=&project=
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Html<String>> {
    render_index(&state, &params, ContactFormView::default())
}

/// GET /projects/{id}
///
/// Shareable project URL. Known ids land on the index with the detail view
/// open; anything else goes back to the plain index.
pub async fn open_project(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    match state.store.find_project(&id) {
        Some(project) => Redirect::to(&format!("/?project={}", project.id)),
        None => {
            tracing::debug!(project_id = %id, "Unknown project link, redirecting to index");
            Redirect::to("/")
        }
    }
}

/// POST /contact
///
/// Re-renders the index with the outcome. A valid message clears the form;
/// an invalid one keeps what the visitor typed next to the reason.
pub async fn submit_contact_form(
    State(state): State<AppState>,
    Form(message): Form<ContactMessage>,
) -> AppResult<Html<String>> {
    let form = match acknowledge(&message) {
        Ok(ack) => {
            tracing::info!(
                ack_id = %ack.id,
                name = %message.name.trim(),
                subject = %message.subject.trim(),
                "Contact message acknowledged",
            );
            ContactFormView::acknowledged(&ack)
        }
        Err(CoreError::Validation(reason)) => ContactFormView::rejected(message, reason),
        Err(err) => return Err(err.into()),
    };

    render_index(&state, &PageParams::default(), form)
}

fn render_index(state: &AppState, params: &PageParams, form: ContactFormView) -> AppResult<Html<String>> {
    let year = chrono::Utc::now().year();
    let page = IndexPage::build(&state.store, params, form, year)?;
    Ok(Html(page.render()?))
}
