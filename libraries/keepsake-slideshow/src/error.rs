//! Error types for the slideshow

use thiserror::Error;

/// Slideshow errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlideshowError {
    /// A slideshow needs at least one slide
    #[error("Slideshow has no slides")]
    NoSlides,

    /// Slide index out of bounds
    #[error("Slide index {index} out of bounds (total: {total})")]
    IndexOutOfBounds { index: usize, total: usize },

    /// Autoplay interval must be non-zero
    #[error("Invalid autoplay interval: {0} ms")]
    InvalidInterval(u64),
}

/// Result type for slideshow operations
pub type Result<T> = std::result::Result<T, SlideshowError>;
