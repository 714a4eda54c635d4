//! Browser bindings
//!
//! Implementations of the core collaborator traits over `web-sys`, plus the
//! `mountGallery` JavaScript entry point.

mod audio;
mod dom;
#[allow(unsafe_code)]
mod mount;
mod timer;

pub use audio::HtmlAudio;
pub use dom::DocumentSurface;
pub use mount::{mount_gallery, GalleryHandle};
pub use timer::WindowScheduler;
