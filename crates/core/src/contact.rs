//! Contact links and the local-only contact form.
//!
//! A submitted message is validated and acknowledged. It is never forwarded
//! to a mail server or any other service.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Title of the acknowledgment shown after a submission.
pub const ACKNOWLEDGMENT_TITLE: &str = "Message Sent!";

/// Body of the acknowledgment shown after a submission.
pub const ACKNOWLEDGMENT_DESCRIPTION: &str =
    "Thank you for reaching out. I'll get back to you soon.";

/// `mailto:` link for an email address.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// `tel:` link for a phone number. Whitespace is not allowed in the URI.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

/// A message submitted through the contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactMessage {
    #[serde(default)]
    #[validate(length(min = 1, max = 120, message = "Name is required (max 120 characters)"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Subject is required (max 200 characters)"))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 5000, message = "Message is required (max 5000 characters)"))]
    pub message: String,
}

impl ContactMessage {
    /// Copy with surrounding whitespace removed from every field.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Validate the message, mapping failures to [`CoreError::Validation`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|errors| CoreError::Validation(describe(&errors)))
    }
}

/// Flatten field errors into one sentence, in field declaration order.
fn describe(errors: &validator::ValidationErrors) -> String {
    let fields = errors.field_errors();
    let mut messages = Vec::new();
    for field in ["name", "email", "subject", "message"] {
        if let Some(field_errors) = fields.get(field) {
            for error in field_errors.iter() {
                match &error.message {
                    Some(message) => messages.push(message.to_string()),
                    None => messages.push(format!("Invalid {field}")),
                }
            }
        }
    }
    messages.join("; ")
}

/// Local acknowledgment of a contact submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acknowledgment {
    pub id: Uuid,
    pub title: &'static str,
    pub description: &'static str,
    pub received_at: Timestamp,
}

/// Normalize, validate, and acknowledge a submission.
pub fn acknowledge(message: &ContactMessage) -> Result<Acknowledgment, CoreError> {
    message.normalized().check()?;
    Ok(Acknowledgment {
        id: Uuid::now_v7(),
        title: ACKNOWLEDGMENT_TITLE,
        description: ACKNOWLEDGMENT_DESCRIPTION,
        received_at: chrono::Utc::now(),
    })
}
