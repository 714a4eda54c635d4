//! Core types for the music player

use serde::{Deserialize, Serialize};

/// Track in the widget playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Media URI handed to the audio element
    #[serde(alias = "src")]
    pub source: String,
}

impl Track {
    /// Create a track without an artist
    pub fn new(title: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: None,
            source: source.into(),
        }
    }

    /// Set the artist
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Title line shown in the player
    ///
    /// `"{title} - {artist}"`, or just the title when there is no artist.
    pub fn display_title(&self) -> String {
        match self.artist.as_deref() {
            Some(artist) if !artist.is_empty() => format!("{} - {}", self.title, artist),
            _ => self.title.clone(),
        }
    }
}

/// Playback state as last reported by the audio element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Not playing (initial state)
    Paused,

    /// Audio element reported playback start
    Playing,
}

/// Configuration for the music player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 70)
    pub volume: u8,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { volume: 70 }
    }
}
