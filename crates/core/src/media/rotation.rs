use serde::Serialize;

use crate::models::MediaItem;

/// Cycling video sequence for a card thumbnail.
///
/// Each card owns its own rotation. The position starts at the first video,
/// advances when the current video ends, and wraps after the last one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoRotation {
    sequence: Vec<MediaItem>,
    position: usize,
}

impl VideoRotation {
    /// Build a rotation from `items`, keeping only videos.
    ///
    /// Returns `None` when no video remains.
    pub fn new(items: impl IntoIterator<Item = MediaItem>) -> Option<Self> {
        let sequence: Vec<MediaItem> = items.into_iter().filter(MediaItem::is_video).collect();
        if sequence.is_empty() {
            return None;
        }
        Some(Self {
            sequence,
            position: 0,
        })
    }

    pub fn current(&self) -> &MediaItem {
        &self.sequence[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn sequence(&self) -> &[MediaItem] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Advance to the next video after the current one finished playing.
    pub fn on_ended(&mut self) -> &MediaItem {
        self.position = (self.position + 1) % self.sequence.len();
        self.current()
    }

    /// Back to the first video, as on remount.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Sources in playback order.
    pub fn sources(&self) -> Vec<&str> {
        self.sequence.iter().map(|item| item.src.as_str()).collect()
    }
}
