//! Keepsake Gallery - Music Player
//!
//! Platform-agnostic playlist player for the gallery widget.
//!
//! This crate provides:
//! - Fixed playlist with cyclic next/previous and auto-advance on track end
//! - Play/pause requests reconciled with the audio element's own notifications
//! - Linear volume (0-100%) mirrored to a slider and readout
//! - Seek bar that tells a thumb drag (seek on release) from a bar click
//!   (seek immediately), and mirrors playback progress otherwise
//!
//! # Architecture
//!
//! `keepsake-playback` never talks to a browser:
//! - Media is driven through [`AudioElement`](keepsake_core::AudioElement)
//! - Controls are drawn through [`Surface`](keepsake_core::Surface)
//! - Audio element notifications are forwarded by the host as method calls
//!
//! # Example
//!
//! ```rust
//! use keepsake_core::{ids, testing::{MockAudio, RecordingSurface}, Rect};
//! use keepsake_playback::{default_tracks, PlaybackConfig, PlaybackController, Playlist};
//!
//! let surface = RecordingSurface::new();
//! surface.set_rect(&ids::PROGRESS_BAR, Rect::new(0.0, 200.0));
//! let audio = MockAudio::new();
//!
//! let mut player = PlaybackController::new(
//!     Playlist::new(default_tracks()).unwrap(),
//!     audio.clone(),
//!     surface.clone(),
//!     &PlaybackConfig::default(),
//! );
//!
//! // Metadata arrives, user clicks a quarter of the way along the bar
//! audio.set_duration(120.0);
//! player.click_bar(50.0);
//! assert_eq!(audio.seeks(), vec![30.0]);
//! ```

#![forbid(unsafe_code)]

mod controller;
mod error;
mod events;
mod playlist;
mod seek;
pub mod types;
mod volume;

// Public exports
pub use controller::{
    PlaybackController, PlaybackSnapshot, MAX_PENDING_EVENTS, PAUSED_LABEL, PLAYING_LABEL,
};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use keepsake_core::AudioElement;
pub use playlist::{default_tracks, Playlist};
pub use seek::{SeekBar, SeekState};
pub use types::{PlaybackConfig, PlaybackState, Track};
pub use volume::Volume;
