//! Media selection policy: rule order, per-project overrides, and the
//! hardcoded fallback assets.
//!
//! Precedence is data. Each rule list is evaluated front to back and the
//! first rule that yields an item wins; the fallback constant is always the
//! implicit last rule.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::MediaItem;
use crate::types::ProjectId;

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

/// Image used when no card or hero rule matches.
pub const FALLBACK_IMAGE: &str = "/projects/spider-bot/img1.jpeg";

/// Alt text for [`FALLBACK_IMAGE`].
pub const FALLBACK_LABEL: &str = "BeetleBot standing pose";

/// Hero fallback used only when [`FALLBACK_IMAGE`] is already the thumbnail.
pub const ALTERNATE_FALLBACK_IMAGE: &str = "/hero-banner.jpg";

/// Alt text for [`ALTERNATE_FALLBACK_IMAGE`].
pub const ALTERNATE_FALLBACK_LABEL: &str = "Portfolio banner";

/// The default card image.
pub fn fallback_media() -> MediaItem {
    MediaItem::image(FALLBACK_IMAGE, Some(FALLBACK_LABEL.to_string()))
}

/// The hero fallback for a project whose thumbnail is `thumbnail_src`.
///
/// Never returns an item whose `src` equals `thumbnail_src`.
pub fn hero_fallback_media(thumbnail_src: &str) -> MediaItem {
    if thumbnail_src == FALLBACK_IMAGE {
        MediaItem::image(
            ALTERNATE_FALLBACK_IMAGE,
            Some(ALTERNATE_FALLBACK_LABEL.to_string()),
        )
    } else {
        fallback_media()
    }
}

/* --------------------------------------------------------------------------
Rules
-------------------------------------------------------------------------- */

/// One step of card thumbnail resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailRule {
    /// The project's explicit `thumbnail` field.
    Explicit,
    /// The first image in the project's media list.
    FirstImage,
    /// An image synthesized from the legacy `image` field.
    LegacyImage,
}

/// One step of detail-view hero resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroRule {
    /// The entry for this project in [`MediaPolicy::hero_overrides`].
    Override,
    /// The first image that is neither the thumbnail nor the legacy image.
    FirstDistinctImage,
    /// The first video that is neither the thumbnail nor the legacy image.
    FirstDistinctVideo,
    /// Any video, even one already used as the thumbnail.
    AnyVideo,
}

pub fn default_thumbnail_rules() -> Vec<ThumbnailRule> {
    vec![
        ThumbnailRule::Explicit,
        ThumbnailRule::FirstImage,
        ThumbnailRule::LegacyImage,
    ]
}

pub fn default_hero_rules() -> Vec<HeroRule> {
    vec![
        HeroRule::Override,
        HeroRule::FirstDistinctImage,
        HeroRule::FirstDistinctVideo,
        HeroRule::AnyVideo,
    ]
}

/// Marks videos of one project that belong in the site-wide document library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentExtra {
    pub project_id: ProjectId,
    /// Substring the video's `src` must contain.
    pub src_contains: String,
}

/// Complete media selection policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaPolicy {
    #[serde(default = "default_thumbnail_rules")]
    pub thumbnail_rules: Vec<ThumbnailRule>,
    #[serde(default = "default_hero_rules")]
    pub hero_rules: Vec<HeroRule>,
    /// Designated hero per project id.
    #[serde(default)]
    pub hero_overrides: HashMap<ProjectId, MediaItem>,
    /// Videos a card cycles through instead of showing a still thumbnail.
    #[serde(default)]
    pub card_rotations: HashMap<ProjectId, Vec<MediaItem>>,
    #[serde(default)]
    pub document_extras: Vec<DocumentExtra>,
}

impl Default for MediaPolicy {
    fn default() -> Self {
        Self {
            thumbnail_rules: default_thumbnail_rules(),
            hero_rules: default_hero_rules(),
            hero_overrides: HashMap::new(),
            card_rotations: HashMap::new(),
            document_extras: Vec::new(),
        }
    }
}

impl MediaPolicy {
    pub fn hero_override(&self, project_id: &str) -> Option<&MediaItem> {
        self.hero_overrides.get(project_id)
    }

    pub fn card_rotation(&self, project_id: &str) -> Option<&[MediaItem]> {
        self.card_rotations.get(project_id).map(Vec::as_slice)
    }

    /// Markers that pull extra videos of `project_id` into the document library.
    pub fn document_markers<'a>(&'a self, project_id: &'a str) -> impl Iterator<Item = &'a str> {
        self.document_extras
            .iter()
            .filter(move |extra| extra.project_id == project_id)
            .map(|extra| extra.src_contains.as_str())
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_fallback_avoids_thumbnail() {
        assert_eq!(hero_fallback_media("/other.jpg").src, FALLBACK_IMAGE);
        assert_eq!(
            hero_fallback_media(FALLBACK_IMAGE).src,
            ALTERNATE_FALLBACK_IMAGE
        );
    }

    #[test]
    fn empty_policy_uses_default_rule_order() {
        let policy: MediaPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, MediaPolicy::default());
    }

    #[test]
    fn rule_order_is_configurable() {
        let policy: MediaPolicy =
            serde_json::from_str(r#"{"thumbnail_rules": ["legacy_image", "first_image"]}"#)
                .unwrap();
        assert_eq!(
            policy.thumbnail_rules,
            vec![ThumbnailRule::LegacyImage, ThumbnailRule::FirstImage]
        );
        assert_eq!(policy.hero_rules, default_hero_rules());
    }

    #[test]
    fn document_markers_filter_by_project() {
        let policy = MediaPolicy {
            document_extras: vec![
                DocumentExtra {
                    project_id: "a".into(),
                    src_contains: "Demo".into(),
                },
                DocumentExtra {
                    project_id: "b".into(),
                    src_contains: "Other".into(),
                },
            ],
            ..MediaPolicy::default()
        };
        assert_eq!(policy.document_markers("a").collect::<Vec<_>>(), vec!["Demo"]);
        assert_eq!(policy.document_markers("c").count(), 0);
    }
}
