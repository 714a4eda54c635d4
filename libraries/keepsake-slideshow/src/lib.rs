//! Keepsake Gallery - Slideshow
//!
//! Slide carousel with manual navigation and timer-driven autoplay.
//!
//! This crate provides:
//! - Cyclic slide navigation (advance, retreat, jump to thumbnail)
//! - Autoplay with a single owned repeating timer
//! - Countdown restart on manual navigation while autoplaying
//! - Rendering of track offset, position readout and active thumbnail
//!
//! Platform code supplies the rendering [`Surface`](keepsake_core::Surface)
//! and an [`IntervalScheduler`], and routes each timer firing back into
//! [`SlideController::on_timer`].
//!
//! # Example
//!
//! ```rust
//! use keepsake_core::testing::RecordingSurface;
//! use keepsake_slideshow::{IntervalScheduler, SlideController, SlideshowConfig, TimerId};
//! use std::time::Duration;
//!
//! // Host timer (setInterval/clearInterval in a browser)
//! struct HostTimers;
//!
//! impl IntervalScheduler for HostTimers {
//!     fn set_interval(&mut self, _period: Duration) -> TimerId {
//!         TimerId::new(1)
//!     }
//!
//!     fn clear_interval(&mut self, _id: TimerId) {}
//! }
//!
//! let mut slides =
//!     SlideController::new(SlideshowConfig::default(), HostTimers, RecordingSurface::new())
//!         .unwrap();
//!
//! slides.start_autoplay();
//!
//! // The host calls back every 3 seconds
//! slides.on_timer(TimerId::new(1));
//! assert_eq!(slides.current_index(), 5);
//! ```

#![forbid(unsafe_code)]

mod controller;
mod error;
pub mod types;

pub use controller::{
    SlideController, ACTIVE_THUMB_CLASS, AUTOPLAY_IDLE_LABEL, AUTOPLAY_RUNNING_LABEL,
};
pub use error::{Result, SlideshowError};
pub use keepsake_core::{IntervalScheduler, TimerId};
pub use types::{SlideshowConfig, SlideshowState};
