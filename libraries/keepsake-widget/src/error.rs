//! Error types for the gallery widget

use keepsake_playback::PlaybackError;
use keepsake_slideshow::SlideshowError;
use thiserror::Error;

/// Widget errors
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Settings document could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Host payload was not valid JSON
    #[error("Invalid host payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Slideshow setup or navigation error
    #[error("Slideshow error: {0}")]
    Slideshow(#[from] SlideshowError),

    /// Music player setup error
    #[error("Playback error: {0}")]
    Playback(#[from] PlaybackError),

    /// Browser binding failure (element missing, listener rejected)
    #[error("Platform error: {0}")]
    Platform(String),
}

impl From<config::ConfigError> for WidgetError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for widget operations
pub type Result<T> = std::result::Result<T, WidgetError>;
