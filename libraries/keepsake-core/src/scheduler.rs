//! Repeating timer abstraction
//!
//! The slide controller owns exactly one [`IntervalScheduler`]. The platform
//! delivers each firing back to the controller as a [`TimerId`].

use std::time::Duration;

/// Opaque handle of a repeating timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Wrap a raw platform handle
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw platform handle
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Platform-agnostic repeating timer
///
/// Implementors arrange for the owner's `on_timer(id)` to be called every
/// `period` until the timer is cleared (`setInterval` in a browser).
pub trait IntervalScheduler {
    /// Start a repeating timer
    fn set_interval(&mut self, period: Duration) -> TimerId;

    /// Cancel a repeating timer
    ///
    /// Clearing an unknown or already cleared id is a no-op.
    fn clear_interval(&mut self, id: TimerId);
}
