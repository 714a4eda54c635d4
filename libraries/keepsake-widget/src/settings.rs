//! Widget settings
//!
//! Structural settings fixed at mount time (slide count, autoplay period,
//! initial volume, playlist). Text content is separate and comes from the
//! host at any time, see [`crate::content`].

use crate::error::Result;
use config::{Config, File, FileFormat};
use keepsake_playback::{default_tracks, PlaybackConfig, Track};
use keepsake_slideshow::SlideshowConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSettings {
    pub slideshow: SlideshowConfig,

    pub playback: PlaybackConfig,

    /// Playlist, in play order (default: the bundled tracks)
    pub tracks: Vec<Track>,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            slideshow: SlideshowConfig::default(),
            playback: PlaybackConfig::default(),
            tracks: default_tracks(),
        }
    }
}

impl WidgetSettings {
    /// Load settings from an optional JSON document layered over the defaults
    ///
    /// Keys absent from the document keep their default value. A document
    /// that sets `tracks` replaces the whole playlist.
    pub fn load(json: Option<&str>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(json) = json.filter(|doc| !doc.trim().is_empty()) {
            builder = builder.add_source(File::from_str(json, FileFormat::Json));
        }

        let settings: Self = builder.build()?.try_deserialize()?;
        tracing::debug!(
            slides = settings.slideshow.total_slides,
            tracks = settings.tracks.len(),
            "widget settings loaded"
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WidgetError;

    #[test]
    fn load_without_document_gives_defaults() {
        let settings = WidgetSettings::load(None).unwrap();
        assert_eq!(settings, WidgetSettings::default());
        assert_eq!(settings.tracks.len(), 3);
    }

    #[test]
    fn blank_document_gives_defaults() {
        let settings = WidgetSettings::load(Some("   ")).unwrap();
        assert_eq!(settings, WidgetSettings::default());
    }

    #[test]
    fn partial_document_overrides_only_given_keys() {
        let settings =
            WidgetSettings::load(Some(r#"{ "slideshow": { "autoplay_interval_ms": 5000 } }"#))
                .unwrap();
        assert_eq!(settings.slideshow.autoplay_interval_ms, 5000);
        assert_eq!(settings.slideshow.total_slides, 6);
        assert_eq!(settings.playback.volume, 70);
    }

    #[test]
    fn tracks_replace_playlist() {
        let settings = WidgetSettings::load(Some(
            r#"{ "tracks": [ { "title": "Rain", "src": "music/rain.mp3" } ] }"#,
        ))
        .unwrap();
        assert_eq!(settings.tracks, vec![Track::new("Rain", "music/rain.mp3")]);
    }

    #[test]
    fn malformed_document_is_config_error() {
        let err = WidgetSettings::load(Some("{ not json")).unwrap_err();
        assert!(matches!(err, WidgetError::Config(_)));
    }
}
