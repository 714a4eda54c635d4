//! Native audio element abstraction
//!
//! Mirrors the small slice of an HTML media element the music player
//! needs. Decoding and output stay on the platform side.

/// Platform-agnostic audio element
///
/// Playback start/stop is asynchronous on every real platform: `play()` and
/// `pause()` only *request* a change, and the platform later reports what
/// actually happened through its own notifications (play-started, paused,
/// time-updated, ended).
pub trait AudioElement {
    /// Point the element at a new media source
    fn set_source(&mut self, uri: &str);

    /// Reset load state and start fetching the current source
    fn load(&mut self);

    /// Request playback start
    fn play(&mut self);

    /// Request playback pause
    fn pause(&mut self);

    /// Current playback position in seconds
    fn current_time(&self) -> f64;

    /// Move the playback position (seconds)
    fn set_current_time(&mut self, seconds: f64);

    /// Track duration in seconds, `None` until metadata is available
    fn duration(&self) -> Option<f64>;

    /// Output volume in `[0, 1]`
    fn set_volume(&mut self, volume: f64);
}

/// Interpret a raw media duration
///
/// Media elements report NaN before metadata loads and +∞ for live
/// streams; neither can be used as a seek denominator.
pub fn known_duration(raw: f64) -> Option<f64> {
    (raw.is_finite() && raw > 0.0).then_some(raw)
}
