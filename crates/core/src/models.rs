//! Content models for the portfolio catalog.
//!
//! The whole site is described by one [`Portfolio`] document, deserialized
//! once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::media::MediaPolicy;
use crate::types::ProjectId;

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

/// Kind of a displayable asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Pdf,
}

/// One image, video, or PDF asset.
///
/// `src` is a path under the static asset root (or an absolute URL). It is
/// never checked for existence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: MediaType,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MediaItem {
    pub fn image(src: impl Into<String>, label: Option<String>) -> Self {
        Self {
            kind: MediaType::Image,
            src: src.into(),
            label,
            description: None,
        }
    }

    pub fn video(src: impl Into<String>, label: Option<String>) -> Self {
        Self {
            kind: MediaType::Video,
            src: src.into(),
            label,
            description: None,
        }
    }

    pub fn is_image(&self) -> bool {
        self.kind == MediaType::Image
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaType::Video
    }

    pub fn is_pdf(&self) -> bool {
        self.kind == MediaType::Pdf
    }

    /// The label, or `fallback` when the item has none.
    pub fn label_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(fallback)
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub short_title: String,
    pub category: String,
    pub summary: String,
    /// Legacy primary image path. Kept for cards without image media.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Explicit card thumbnail; wins over everything else.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<MediaItem>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub content: ProjectContent,
}

impl Project {
    /// The legacy image path, treating an empty string as unset.
    pub fn legacy_image(&self) -> Option<&str> {
        self.image.as_deref().filter(|src| !src.is_empty())
    }

    /// All media items attached to the project, in authored order.
    pub fn media(&self) -> &[MediaItem] {
        &self.content.media
    }
}

/// Detailed narrative for a project. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectContent {
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub innovation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methodology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_projects: Vec<SubProject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hardware_groups: Vec<HardwareGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comparisons: Vec<ComparisonStage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_flow: Vec<ContentFlowItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media: Vec<MediaItem>,
}

/// A narrative block paired with one media item by position.
///
/// `media_index` points into the owning project's media list. Blocks whose
/// index is out of range are skipped at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentFlowItem {
    pub media_index: usize,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubProject {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonStage {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub hardware_components: Vec<String>,
    #[serde(default)]
    pub functions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub graduation: String,
    #[serde(default)]
    pub grades: String,
}

/// Biography and highlights shown in the profile header and about section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutData {
    pub name: String,
    pub title: String,
    pub bio: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub technical_background: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub leadership: Vec<String>,
}

impl AboutData {
    /// Upper-cased first letter of each word of the name ("Ada Lovelace" -> "AL").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactData {
    pub email: String,
    pub phone: String,
    pub location: String,
    #[serde(default)]
    pub socials: Socials,
}

/// One slide of the banner carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSlide {
    pub src: String,
    pub caption: String,
}

// ---------------------------------------------------------------------------
// Site settings
// ---------------------------------------------------------------------------

fn default_spotlight_category() -> String {
    "Spotlight".to_string()
}

fn default_true() -> bool {
    true
}

/// How project listings are ordered and which entries are featured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSettings {
    #[serde(default = "default_spotlight_category")]
    pub spotlight_category: String,
    /// Promote the spotlight category to the front of unfiltered listings.
    #[serde(default = "default_true")]
    pub spotlight_first: bool,
    #[serde(default)]
    pub featured: Vec<ProjectId>,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            spotlight_category: default_spotlight_category(),
            spotlight_first: true,
            featured: Vec::new(),
        }
    }
}

/// Switches for the media-driven sections of the project detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionToggles {
    #[serde(default = "default_true")]
    pub documents: bool,
    #[serde(default = "default_true")]
    pub videos: bool,
    #[serde(default = "default_true")]
    pub story: bool,
}

impl Default for SectionToggles {
    fn default() -> Self {
        Self {
            documents: true,
            videos: true,
            story: true,
        }
    }
}

/// The complete site content document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<String>,
    pub about: AboutData,
    pub contact: ContactData,
    #[serde(default)]
    pub hero_slides: Vec<HeroSlide>,
    #[serde(default)]
    pub listing: ListingSettings,
    #[serde(default)]
    pub sections: SectionToggles,
    #[serde(default)]
    pub policy: MediaPolicy,
}
