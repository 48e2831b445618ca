//! Type-based partitions of project media for the documents and videos
//! sections.

use serde::Serialize;

use crate::media::policy::MediaPolicy;
use crate::models::{MediaItem, Project};

/// A project's media split by kind. Images are not part of any gallery.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MediaGallery<'a> {
    pub documents: Vec<&'a MediaItem>,
    pub videos: Vec<&'a MediaItem>,
}

impl MediaGallery<'_> {
    pub fn has_documents(&self) -> bool {
        !self.documents.is_empty()
    }

    pub fn has_videos(&self) -> bool {
        !self.videos.is_empty()
    }
}

pub fn partition_gallery(project: &Project) -> MediaGallery<'_> {
    let media = project.media();
    MediaGallery {
        documents: media.iter().filter(|m| m.is_pdf()).collect(),
        videos: media.iter().filter(|m| m.is_video()).collect(),
    }
}

/// One project's row in the site-wide document library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentEntry<'a> {
    pub project: &'a Project,
    pub documents: Vec<&'a MediaItem>,
}

/// Collect the documents of every project, in catalog order.
///
/// A project contributes its PDFs followed by any videos whose `src` matches
/// one of its document markers. Projects contributing nothing are left out.
pub fn document_library<'a>(
    projects: &'a [Project],
    policy: &MediaPolicy,
) -> Vec<DocumentEntry<'a>> {
    projects
        .iter()
        .filter_map(|project| {
            let media = project.media();
            let mut documents: Vec<&MediaItem> = media.iter().filter(|m| m.is_pdf()).collect();
            documents.extend(media.iter().filter(|m| {
                m.is_video()
                    && policy
                        .document_markers(&project.id)
                        .any(|marker| m.src.contains(marker))
            }));

            (!documents.is_empty()).then_some(DocumentEntry { project, documents })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::fixtures::{item, project};
    use crate::media::policy::DocumentExtra;
    use crate::models::MediaType;

    #[test]
    fn partitions_by_kind() {
        let mut p = project("p", "Robotics");
        p.content.media = vec![
            item(MediaType::Image, "/a.jpg"),
            item(MediaType::Pdf, "/d1.pdf"),
            item(MediaType::Video, "/v.mp4"),
            item(MediaType::Pdf, "/d2.pdf"),
        ];
        let gallery = partition_gallery(&p);
        let docs: Vec<_> = gallery.documents.iter().map(|m| m.src.as_str()).collect();
        assert_eq!(docs, vec!["/d1.pdf", "/d2.pdf"]);
        assert_eq!(gallery.videos.len(), 1);
    }

    #[test]
    fn empty_partitions_report_absent() {
        let mut p = project("p", "Robotics");
        p.content.media = vec![item(MediaType::Image, "/a.jpg")];
        let gallery = partition_gallery(&p);
        assert!(!gallery.has_documents());
        assert!(!gallery.has_videos());
    }

    #[test]
    fn library_includes_marked_videos_and_drops_empty_projects() {
        let mut with_docs = project("compost", "Spotlight");
        with_docs.content.media = vec![
            item(MediaType::Video, "/videos/Other.mp4"),
            item(MediaType::Video, "/videos/Demo_2025.mp4"),
            item(MediaType::Pdf, "/docs/deck.pdf"),
        ];
        let mut images_only = project("bot", "Spotlight");
        images_only.content.media = vec![item(MediaType::Image, "/a.jpg")];
        let mut unmarked = project("other", "Community");
        unmarked.content.media = vec![item(MediaType::Video, "/videos/Demo_2025.mp4")];

        let policy = MediaPolicy {
            document_extras: vec![DocumentExtra {
                project_id: "compost".into(),
                src_contains: "Demo".into(),
            }],
            ..MediaPolicy::default()
        };

        let projects = vec![images_only, with_docs, unmarked];
        let library = document_library(&projects, &policy);

        assert_eq!(library.len(), 1);
        assert_eq!(library[0].project.id, "compost");
        let srcs: Vec<_> = library[0].documents.iter().map(|m| m.src.as_str()).collect();
        assert_eq!(srcs, vec!["/docs/deck.pdf", "/videos/Demo_2025.mp4"]);
    }
}
