use serde::Serialize;

use crate::models::{ContentFlowItem, MediaItem, Project};

/// A content-flow block whose media reference resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryBlock<'a> {
    /// Index of the block in the authored content flow, skipped blocks included.
    pub position: usize,
    #[serde(flatten)]
    pub item: &'a ContentFlowItem,
    pub media: &'a MediaItem,
}

impl StoryBlock<'_> {
    /// Alternating layouts flip every other authored block.
    pub fn is_reversed(&self) -> bool {
        self.position % 2 == 1
    }
}

/// Pair each content-flow block with its media item.
///
/// Blocks pointing past the end of the media list are omitted; the rest keep
/// their order and position.
pub fn resolve_story(project: &Project) -> Vec<StoryBlock<'_>> {
    let media = project.media();
    project
        .content
        .content_flow
        .iter()
        .enumerate()
        .filter_map(|(position, item)| {
            media.get(item.media_index).map(|media| StoryBlock {
                position,
                item,
                media,
            })
        })
        .collect()
}
