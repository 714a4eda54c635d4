//! Seek bar drag state
//!
//! Separates a press-and-move gesture on the thumb (seek deferred until
//! release) from a direct click on the bar (seek immediately).
//!
//! ```text
//! Idle --press thumb--> Dragging --release--> Idle   (commits seek)
//! Idle --click bar----> Idle                         (commits seek)
//! ```

use serde::{Deserialize, Serialize};

/// Interaction state of the seek bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeekState {
    /// Bar follows playback
    Idle,

    /// User holds the thumb; bar follows the pointer
    Dragging,
}

/// Seek bar model
///
/// While dragging, `fraction` is authoritative and playback progress is
/// not shown. Otherwise it mirrors the media position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekBar {
    state: SeekState,
    fraction: f64,
}

impl SeekBar {
    pub fn new() -> Self {
        Self {
            state: SeekState::Idle,
            fraction: 0.0,
        }
    }

    /// Thumb pressed
    pub fn begin_drag(&mut self) {
        self.state = SeekState::Dragging;
    }

    /// Thumb released
    pub fn end_drag(&mut self) {
        self.state = SeekState::Idle;
    }

    /// Set the displayed fraction, clamped to `[0, 1]`
    ///
    /// Non-finite input is ignored.
    pub fn set_fraction(&mut self, fraction: f64) {
        if fraction.is_finite() {
            self.fraction = fraction.clamp(0.0, 1.0);
        }
    }

    pub fn state(&self) -> SeekState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == SeekState::Dragging
    }

    /// Displayed position in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Displayed position as a CSS percentage (`"37.5%"`)
    pub fn css_percent(&self) -> String {
        format!("{}%", self.fraction * 100.0)
    }
}

impl Default for SeekBar {
    fn default() -> Self {
        Self::new()
    }
}
