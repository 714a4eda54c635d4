//! Core types for the slideshow

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Autoplay state of the slideshow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideshowState {
    /// Slides only move on user input
    Idle,

    /// A repeating timer advances the slides
    AutoPlaying,
}

/// Configuration for the slide controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideshowConfig {
    /// Number of slides in the track (default: 6)
    pub total_slides: usize,

    /// Autoplay period in milliseconds (default: 3000)
    pub autoplay_interval_ms: u64,
}

impl SlideshowConfig {
    /// Autoplay period as a duration
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            total_slides: 6,
            autoplay_interval_ms: 3000,
        }
    }
}
