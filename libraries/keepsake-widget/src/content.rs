//! Host-editable text content
//!
//! A hosting page builder pushes partial configuration objects at any time.
//! Each push is merged over what is already known, and the three text slots
//! are rewritten. Strings, non-zero numbers and `true` are shown as text.
//! Anything else (missing, `null`, `""`, `0`, `false`, arrays, objects)
//! shows the slot's default.

use crate::error::Result;
use keepsake_core::{ids, ElementId, Surface};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// The text slots a host can edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKey {
    GalleryTitle,
    StoryText,
    MusicTitle,
}

impl ContentKey {
    /// All keys, in edit panel order
    pub const ALL: [ContentKey; 3] = [
        ContentKey::GalleryTitle,
        ContentKey::StoryText,
        ContentKey::MusicTitle,
    ];

    /// Key used in host payloads
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKey::GalleryTitle => "gallery_title",
            ContentKey::StoryText => "story_text",
            ContentKey::MusicTitle => "music_title",
        }
    }

    pub fn default_text(self) -> &'static str {
        match self {
            ContentKey::GalleryTitle => "My Photo Gallery",
            ContentKey::StoryText => {
                "Share your story here... Tell us about these beautiful memories!"
            }
            ContentKey::MusicTitle => "Now Playing",
        }
    }

    fn element(self) -> ElementId {
        match self {
            ContentKey::GalleryTitle => ids::GALLERY_HEADING,
            ContentKey::StoryText => ids::STORY_TEXT,
            ContentKey::MusicTitle => ids::MUSIC_TITLE,
        }
    }
}

/// Default host configuration (every key at its default text)
pub fn default_config() -> Map<String, Value> {
    ContentKey::ALL
        .iter()
        .map(|key| (key.as_str().to_string(), Value::from(key.default_text())))
        .collect()
}

/// Text for `key` in `config`, falling back to its default
pub fn effective_text(config: &Map<String, Value>, key: ContentKey) -> String {
    config
        .get(key.as_str())
        .and_then(display_text)
        .unwrap_or_else(|| key.default_text().to_string())
}

fn display_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Edit panel entries for `config`, in panel order
pub fn edit_panel_values(config: &Map<String, Value>) -> Vec<(&'static str, String)> {
    ContentKey::ALL
        .iter()
        .map(|key| (key.as_str(), effective_text(config, *key)))
        .collect()
}

/// Editing capabilities advertised to the host
///
/// The gallery exposes no recolorable or borderable regions and no font
/// controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub recolorables: Vec<String>,
    pub borderables: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_sizeable: Option<bool>,
}

/// Adapter between the host configuration SDK and the text slots
pub struct ContentAdapter<S: Surface> {
    surface: S,
    config: Map<String, Value>,
}

impl<S: Surface> ContentAdapter<S> {
    /// Create an adapter holding the default configuration
    ///
    /// Nothing is written until the first [`on_config_change`](Self::on_config_change).
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            config: default_config(),
        }
    }

    /// Merge a partial configuration and rewrite the text slots
    pub fn on_config_change(&mut self, partial: Map<String, Value>) {
        debug!(keys = partial.len(), "host config change");
        self.config.extend(partial);

        let title = self.effective(ContentKey::GalleryTitle);
        self.surface
            .set_text(&ContentKey::GalleryTitle.element(), &title);

        let story = self.effective(ContentKey::StoryText);
        self.surface.set_value(&ContentKey::StoryText.element(), &story);

        let music = self.effective(ContentKey::MusicTitle);
        self.surface
            .set_text(&ContentKey::MusicTitle.element(), &music);
    }

    /// Same as [`on_config_change`](Self::on_config_change), from a JSON object
    pub fn on_config_change_json(&mut self, json: &str) -> Result<()> {
        let partial: Map<String, Value> = serde_json::from_str(json)?;
        self.on_config_change(partial);
        Ok(())
    }

    /// Current text for a slot, falling back to its default
    pub fn effective(&self, key: ContentKey) -> String {
        effective_text(&self.config, key)
    }

    /// Capabilities for the host's editing UI
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    /// Values shown in the host's edit panel, in panel order
    pub fn edit_panel_values(&self) -> Vec<(&'static str, String)> {
        edit_panel_values(&self.config)
    }

    /// Raw merged configuration
    pub fn config(&self) -> &Map<String, Value> {
        &self.config
    }
}
