//! Project detail (modal) view model.
//!
//! Sections are emitted in a fixed reading order and only when they have
//! something to show, so a suppressed section leaves no trace in the page.

use folio_core::media::{partition_gallery, resolve_hero, resolve_story, MediaPolicy, StoryBlock};
use folio_core::models::{ComparisonStage, HardwareGroup, Project, SectionToggles, SubProject};

use crate::views::MediaLink;

/// The detail view of one project.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub hero: MediaLink,
    pub sections: Vec<DetailSection>,
}

/// One titled block of the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSection {
    /// Stable identifier, rendered as the container's `data-section`.
    pub key: &'static str,
    pub heading: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionBody {
    Documents(Vec<MediaLink>),
    Videos(Vec<MediaLink>),
    Story(Vec<StoryView>),
    Prose(Vec<String>),
    Bullets(Vec<String>),
    Hardware(Vec<HardwareGroup>),
    Comparisons(Vec<ComparisonStage>),
    Collection(Vec<SubProject>),
    References(Vec<String>),
}

/// A story block ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryView {
    /// Media on the right instead of the left.
    pub reversed: bool,
    pub subtitle: String,
    pub title: String,
    pub text: String,
    pub bullets: Vec<String>,
    pub media: MediaLink,
}

impl From<&StoryBlock<'_>> for StoryView {
    fn from(block: &StoryBlock<'_>) -> Self {
        Self {
            reversed: block.is_reversed(),
            subtitle: block.item.subtitle.clone().unwrap_or_default(),
            title: block.item.title.clone(),
            text: block.item.text.clone(),
            bullets: block.item.bullets.clone(),
            media: MediaLink::new(block.media, &block.item.title),
        }
    }
}

impl DetailView {
    pub fn build(project: &Project, toggles: SectionToggles, policy: &MediaPolicy) -> Self {
        let hero = resolve_hero(project, policy);

        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            category: project.category.clone(),
            summary: project.summary.clone(),
            tags: project.tags.clone(),
            hero: MediaLink::new(&hero, &project.title),
            sections: build_sections(project, toggles),
        }
    }

    pub fn section(&self, key: &str) -> Option<&DetailSection> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn section_keys(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.key).collect()
    }
}

fn build_sections(project: &Project, toggles: SectionToggles) -> Vec<DetailSection> {
    let content = &project.content;
    let gallery = partition_gallery(project);
    let story = resolve_story(project);

    let mut sections = Vec::new();
    let mut push = |key: &'static str, heading: &str, body: SectionBody| {
        sections.push(DetailSection {
            key,
            heading: heading.to_string(),
            body,
        });
    };

    if toggles.documents && gallery.has_documents() {
        push(
            "documents",
            "Supporting Documents",
            SectionBody::Documents(links(&gallery.documents, "Document")),
        );
    }
    if toggles.videos && gallery.has_videos() {
        push(
            "videos",
            "Videos",
            SectionBody::Videos(links(&gallery.videos, "Video")),
        );
    }
    if toggles.story && !story.is_empty() {
        push(
            "story",
            &format!("{} Story", project.title),
            SectionBody::Story(story.iter().map(StoryView::from).collect()),
        );
    }

    let prose_sections: [(&'static str, &str, Vec<String>); 4] = [
        ("abstract", "Abstract", paragraphs([&content.abstract_text])),
        (
            "introduction",
            "Introduction & Objective",
            paragraphs([&content.introduction, &content.objective]),
        ),
        ("background", "Background Research", paragraphs([&content.background])),
        ("innovation", "Innovation", paragraphs([&content.innovation])),
    ];
    for (key, heading, text) in prose_sections {
        if !text.is_empty() {
            push(key, heading, SectionBody::Prose(text));
        }
    }

    if !content.materials.is_empty() {
        push(
            "materials",
            "Materials Used",
            SectionBody::Bullets(content.materials.clone()),
        );
    }
    if !content.hardware_groups.is_empty() {
        push(
            "hardware",
            "Hardware & Lab Requirements",
            SectionBody::Hardware(content.hardware_groups.clone()),
        );
    }
    if !content.comparisons.is_empty() {
        push(
            "comparisons",
            "Comparative Architecture",
            SectionBody::Comparisons(content.comparisons.clone()),
        );
    }

    for (key, heading, field) in [
        ("methodology", "Methodology", &content.methodology),
        ("results", "Results & Conclusion", &content.results),
    ] {
        let text = paragraphs([field]);
        if !text.is_empty() {
            push(key, heading, SectionBody::Prose(text));
        }
    }

    if !content.sub_projects.is_empty() {
        push(
            "collection",
            "Project Collection",
            SectionBody::Collection(content.sub_projects.clone()),
        );
    }
    if !content.citations.is_empty() {
        push(
            "references",
            "References",
            SectionBody::References(content.citations.clone()),
        );
    }

    sections
}

fn links(items: &[&folio_core::models::MediaItem], fallback_label: &str) -> Vec<MediaLink> {
    items
        .iter()
        .map(|item| MediaLink::new(item, fallback_label))
        .collect()
}

/// Present, non-blank text fields in order.
fn paragraphs<const N: usize>(fields: [&Option<String>; N]) -> Vec<String> {
    fields
        .into_iter()
        .filter_map(|f| f.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
