//! Story text box auto-resize

use keepsake_core::{ids, Surface};

/// Minimum story box height in pixels
pub const MIN_STORY_HEIGHT: f64 = 128.0;

/// Grow or shrink the story box to fit its content
///
/// The height is reset to `auto` first so the measured scroll height
/// reflects the content rather than the previous size.
pub fn resize_story_box<S: Surface>(surface: &mut S) {
    surface.set_style(&ids::STORY_TEXT, "height", "auto");

    let content = surface
        .scroll_height(&ids::STORY_TEXT)
        .filter(|h| h.is_finite())
        .unwrap_or(0.0);
    let height = content.max(MIN_STORY_HEIGHT);

    surface.set_style(&ids::STORY_TEXT, "height", &format!("{height}px"));
}
