//! Server-rendered views.
//!
//! Each view is a plain struct built from the content store by an ordinary
//! function, so the decisions a page makes (which card media, which detail
//! sections, which filter tab is active) are testable without rendering.
//! Templates under `templates/` only format what the builders decided.

pub mod card;
pub mod detail;
pub mod page;

use folio_core::models::MediaItem;

pub use card::{CardRotationView, CardView};
pub use detail::{DetailSection, DetailView, SectionBody};
pub use page::{ContactFormView, IndexPage, Notice};

/// A media asset reduced to what a template needs to render it.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaLink {
    pub src: String,
    pub label: String,
    pub is_video: bool,
    pub is_pdf: bool,
}

impl MediaLink {
    /// Build a link, labelling unlabelled items with `fallback_label`.
    pub fn new(item: &MediaItem, fallback_label: &str) -> Self {
        Self {
            src: item.src.clone(),
            label: item.label_or(fallback_label).to_string(),
            is_video: item.is_video(),
            is_pdf: item.is_pdf(),
        }
    }

    /// Call-to-action text for document rows.
    pub fn action(&self) -> &'static str {
        if self.is_video {
            "Watch"
        } else {
            "Download"
        }
    }
}
