//! Keepsake Gallery - Widget
//!
//! The embeddable photo gallery: slideshow, music player, theme toggle,
//! auto-sizing story box and host-editable text, assembled on one surface.
//!
//! # Architecture
//!
//! - [`GalleryWidget`] composes the slide and playback controllers with the
//!   [`ThemeController`] and the host [`ContentAdapter`]
//! - [`WidgetSettings`] holds mount-time structure (slides, autoplay period,
//!   volume, playlist), loaded with the `config` crate
//! - The `wasm` feature adds browser implementations of the collaborator
//!   traits and the `mountGallery` JavaScript entry point
//!
//! # Example
//!
//! ```rust
//! use keepsake_core::{ids, testing::{ManualScheduler, MockAudio, RecordingSurface}};
//! use keepsake_widget::{GalleryWidget, Theme, WidgetSettings};
//!
//! let surface = RecordingSurface::new();
//! let mut gallery = GalleryWidget::new(
//!     WidgetSettings::default(),
//!     surface.clone(),
//!     MockAudio::new(),
//!     ManualScheduler::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(surface.text(&ids::GALLERY_HEADING).as_deref(), Some("My Photo Gallery"));
//! assert_eq!(gallery.toggle_theme(), Theme::Cyan);
//! ```

pub mod content;
mod error;
pub mod logging;
mod settings;
pub mod story;
mod theme;
mod widget;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use content::{Capabilities, ContentAdapter, ContentKey};
pub use error::{Result, WidgetError};
pub use logging::init_logging;
pub use settings::WidgetSettings;
pub use theme::{Theme, ThemeController};
pub use widget::GalleryWidget;
