//! Playback Events
//!
//! Event-based communication for hosts that mirror player state.
//! Events are queued at key points:
//! - Track changes (load, next, previous, auto-advance)
//! - State changes reported by the audio element
//! - Committed seeks
//! - Volume changes
//!
//! Passive progress updates are not queued; they fire several times a
//! second and only touch the seek bar visuals.

use crate::types::PlaybackState;
use serde::{Deserialize, Serialize};

/// Events emitted by the music player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlaybackEvent {
    /// A new track was loaded into the audio element
    TrackChanged {
        /// Playlist index of the new track
        index: usize,
        /// Display title of the new track
        title: String,
    },

    /// Audio element reported a playback state change
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// Playback position moved by user action
    Seeked {
        /// New position in seconds
        position_secs: f64,
        /// New position as a fraction of the duration
        fraction: f64,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
    },
}
