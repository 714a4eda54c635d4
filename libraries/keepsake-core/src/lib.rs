//! Keepsake Gallery Core
//!
//! Platform-agnostic collaborator traits for the Keepsake gallery widget.
//!
//! The gallery controllers never touch a browser directly. They issue
//! idempotent "set this text/class/style" commands against a [`Surface`],
//! request playback changes from an [`AudioElement`], and start and clear
//! repeating timers through an [`IntervalScheduler`].
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Surface**: the rendering collaborator, plus [`Rect`] geometry
//! - **AudioElement**: the native media element collaborator
//! - **IntervalScheduler**: the repeating timer collaborator
//! - **Element ids**: the well-known element identifiers of the widget markup
//! - **Test doubles** (`test-utils` feature): recording implementations of all three
//!
//! # Example
//!
//! ```rust
//! use keepsake_core::{ids, known_duration, Rect};
//!
//! let bar = Rect::new(100.0, 200.0);
//! assert_eq!(bar.fraction_at(200.0), Some(0.5));
//! assert_eq!(known_duration(f64::NAN), None);
//! assert_eq!(ids::thumbnail(3).as_str(), "thumbnail-3");
//! ```

#![forbid(unsafe_code)]

mod audio;
pub mod ids;
mod scheduler;
mod surface;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use audio::{known_duration, AudioElement};
pub use ids::ElementId;
pub use scheduler::{IntervalScheduler, TimerId};
pub use surface::{Rect, Surface};
