//! Element identifiers used by the gallery markup

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Identifier of an element on the rendering surface
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(Cow<'static, str>);

impl ElementId {
    /// Create an id from a static string (usable in `const` context)
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// Create an id from an owned string
    pub fn new(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ElementId {
    fn from(id: &'static str) -> Self {
        Self::from_static(id)
    }
}

// ===== Slideshow =====

pub const SLIDESHOW_TRACK: ElementId = ElementId::from_static("slideshow-track");
pub const CURRENT_SLIDE: ElementId = ElementId::from_static("current-slide");
pub const TOTAL_SLIDES: ElementId = ElementId::from_static("total-slides");
pub const AUTOPLAY_TOGGLE: ElementId = ElementId::from_static("autoplay-toggle");
pub const PREV_SLIDE: ElementId = ElementId::from_static("prev-slide");
pub const NEXT_SLIDE: ElementId = ElementId::from_static("next-slide");

/// Thumbnail button for the slide at `index` (0-based)
pub fn thumbnail(index: usize) -> ElementId {
    ElementId::new(format!("thumbnail-{}", index))
}

// ===== Music player =====

pub const PLAY_BUTTON: ElementId = ElementId::from_static("play-btn");
pub const PREV_BUTTON: ElementId = ElementId::from_static("prev-btn");
pub const NEXT_BUTTON: ElementId = ElementId::from_static("next-btn");
pub const VOLUME_SLIDER: ElementId = ElementId::from_static("volume-slider");
pub const VOLUME_DISPLAY: ElementId = ElementId::from_static("volume-display");
pub const PROGRESS_BAR: ElementId = ElementId::from_static("progress-bar");
pub const PROGRESS_FILL: ElementId = ElementId::from_static("progress-fill");
pub const PROGRESS_THUMB: ElementId = ElementId::from_static("progress-thumb");
pub const MUSIC_TITLE: ElementId = ElementId::from_static("music-title");

// ===== Page chrome =====

pub const THEME_TOGGLE: ElementId = ElementId::from_static("theme-toggle");
pub const GALLERY_CONTAINER: ElementId = ElementId::from_static("gallery-container");
pub const GALLERY_HEADER: ElementId = ElementId::from_static("gallery-header");
pub const GALLERY_HEADING: ElementId = ElementId::from_static("gallery-title");
pub const GALLERY_SUBTITLE: ElementId = ElementId::from_static("gallery-subtitle");
pub const STORY_TEXT: ElementId = ElementId::from_static("story-text");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_ids_are_zero_based() {
        assert_eq!(thumbnail(0).as_str(), "thumbnail-0");
        assert_eq!(thumbnail(5).to_string(), "thumbnail-5");
    }

    #[test]
    fn static_and_owned_ids_compare_equal() {
        assert_eq!(ElementId::new("music-title"), MUSIC_TITLE);
    }
}
