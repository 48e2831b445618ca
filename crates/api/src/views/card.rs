//! Project card view model.

use folio_core::media::{resolve_card_media, CardMedia, MediaPolicy};
use folio_core::models::Project;

use crate::error::{AppError, AppResult};

/// Number of tags shown on a card.
pub const CARD_TAG_LIMIT: usize = 3;

/// A project as shown in the listing grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub href: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub tags: Vec<String>,
    /// Still image (the poster when the card rotates videos).
    pub image_src: String,
    pub image_alt: String,
    pub rotation: Option<CardRotationView>,
}

/// Video sequence a card cycles through.
#[derive(Debug, Clone, PartialEq)]
pub struct CardRotationView {
    pub first_src: String,
    /// JSON array of sources, read by the page script on `ended`.
    pub sources_json: String,
}

impl CardView {
    pub fn build(project: &Project, policy: &MediaPolicy) -> AppResult<Self> {
        let media = resolve_card_media(project, policy);
        let still = media.still();

        let rotation = match &media {
            CardMedia::Still { .. } => None,
            CardMedia::Rotation { rotation, .. } => {
                let sources_json = serde_json::to_string(&rotation.sources()).map_err(|e| {
                    AppError::InternalError(format!(
                        "Failed to encode rotation for project '{}': {e}",
                        project.id
                    ))
                })?;
                Some(CardRotationView {
                    first_src: rotation.current().src.clone(),
                    sources_json,
                })
            }
        };

        Ok(Self {
            id: project.id.clone(),
            href: format!("/projects/{}", project.id),
            title: project.title.clone(),
            category: project.category.clone(),
            summary: project.summary.clone(),
            tags: project.tags.iter().take(CARD_TAG_LIMIT).cloned().collect(),
            image_src: still.src.clone(),
            image_alt: still.label_or(&project.title).to_string(),
            rotation,
        })
    }
}
