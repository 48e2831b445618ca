//! Handler for the JSON contact endpoint.
//!
//! Messages are validated and acknowledged locally. Nothing is stored or
//! forwarded, and only the sender's name and subject reach the logs.

use axum::response::IntoResponse;
use axum::Json;
use folio_core::contact::{acknowledge, ContactMessage};

use crate::error::AppResult;
use crate::response::DataResponse;

/// POST /api/v1/contact
///
/// Returns the acknowledgment, or 400 `VALIDATION_ERROR` listing every
/// invalid field.
pub async fn submit_message(Json(message): Json<ContactMessage>) -> AppResult<impl IntoResponse> {
    let ack = acknowledge(&message)?;

    tracing::info!(
        ack_id = %ack.id,
        name = %message.name.trim(),
        subject = %message.subject.trim(),
        "Contact message acknowledged",
    );

    Ok(Json(DataResponse { data: ack }))
}
