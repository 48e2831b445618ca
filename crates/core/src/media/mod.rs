//! Media resolution for cards and detail views.
//!
//! Every function here is a pure function of a [`Project`] and a
//! [`MediaPolicy`]. Resolution never fails: when no rule matches, the
//! hardcoded fallback image is used.

pub mod gallery;
pub mod policy;
pub mod rotation;
pub mod story;

use serde::Serialize;

use crate::models::{MediaItem, Project};

pub use gallery::{document_library, partition_gallery, DocumentEntry, MediaGallery};
pub use policy::{
    fallback_media, hero_fallback_media, DocumentExtra, HeroRule, MediaPolicy, ThumbnailRule,
    ALTERNATE_FALLBACK_IMAGE, FALLBACK_IMAGE,
};
pub use rotation::VideoRotation;
pub use story::{resolve_story, StoryBlock};

// ---------------------------------------------------------------------------
// Card thumbnail
// ---------------------------------------------------------------------------

impl ThumbnailRule {
    fn apply(self, project: &Project) -> Option<MediaItem> {
        match self {
            ThumbnailRule::Explicit => project.thumbnail.clone(),
            ThumbnailRule::FirstImage => project.media().iter().find(|m| m.is_image()).cloned(),
            ThumbnailRule::LegacyImage => project
                .legacy_image()
                .map(|src| MediaItem::image(src, Some(project.title.clone()))),
        }
    }
}

/// Pick the still image shown on a project's card.
pub fn resolve_thumbnail(project: &Project, policy: &MediaPolicy) -> MediaItem {
    policy
        .thumbnail_rules
        .iter()
        .find_map(|rule| rule.apply(project))
        .unwrap_or_else(fallback_media)
}

/// What a card displays: a still image, or a cycling video sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardMedia {
    Still {
        media: MediaItem,
    },
    Rotation {
        /// Still shown before the first video loads.
        poster: MediaItem,
        rotation: VideoRotation,
    },
}

impl CardMedia {
    /// The still image for this card (the poster for rotating cards).
    pub fn still(&self) -> &MediaItem {
        match self {
            CardMedia::Still { media } => media,
            CardMedia::Rotation { poster, .. } => poster,
        }
    }
}

/// Resolve a card's media, honoring any configured video rotation.
pub fn resolve_card_media(project: &Project, policy: &MediaPolicy) -> CardMedia {
    let thumbnail = resolve_thumbnail(project, policy);
    let rotation = policy
        .card_rotation(&project.id)
        .and_then(|items| VideoRotation::new(items.iter().cloned()));

    match rotation {
        Some(rotation) => CardMedia::Rotation {
            poster: thumbnail,
            rotation,
        },
        None => CardMedia::Still { media: thumbnail },
    }
}

// ---------------------------------------------------------------------------
// Detail hero
// ---------------------------------------------------------------------------

/// Inputs shared by every hero rule.
struct HeroContext<'a> {
    project: &'a Project,
    policy: &'a MediaPolicy,
    /// Sources the hero should not repeat.
    excluded: Vec<&'a str>,
}

impl HeroContext<'_> {
    fn is_distinct(&self, item: &MediaItem) -> bool {
        !self.excluded.contains(&item.src.as_str())
    }
}

impl HeroRule {
    fn apply(self, ctx: &HeroContext<'_>) -> Option<MediaItem> {
        let media = ctx.project.media();
        match self {
            HeroRule::Override => ctx.policy.hero_override(&ctx.project.id).cloned(),
            HeroRule::FirstDistinctImage => media
                .iter()
                .find(|m| m.is_image() && ctx.is_distinct(m))
                .cloned(),
            HeroRule::FirstDistinctVideo => media
                .iter()
                .find(|m| m.is_video() && ctx.is_distinct(m))
                .cloned(),
            HeroRule::AnyVideo => media.iter().find(|m| m.is_video()).cloned(),
        }
    }
}

/// Pick the large featured asset at the top of a project's detail view.
///
/// Without an override, the result differs from the card thumbnail unless
/// the only candidate is a video that is also the thumbnail.
pub fn resolve_hero(project: &Project, policy: &MediaPolicy) -> MediaItem {
    let thumbnail = resolve_thumbnail(project, policy);

    let mut excluded = vec![thumbnail.src.as_str()];
    if let Some(legacy) = project.legacy_image() {
        excluded.push(legacy);
    }

    let ctx = HeroContext {
        project,
        policy,
        excluded,
    };

    policy
        .hero_rules
        .iter()
        .find_map(|rule| rule.apply(&ctx))
        .unwrap_or_else(|| hero_fallback_media(&thumbnail.src))
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
