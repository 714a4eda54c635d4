//! Playback controller - playlist, transport, volume and seek bar
//!
//! Coordinates the playlist cursor, the audio element and the player
//! controls on the rendering surface.

use crate::{
    error::Result,
    events::PlaybackEvent,
    playlist::Playlist,
    seek::SeekBar,
    types::{PlaybackConfig, PlaybackState},
    volume::Volume,
};
use keepsake_core::{ids, AudioElement, Surface};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Play button label while playing
pub const PLAYING_LABEL: &str = "⏸️";

/// Play button label while paused
pub const PAUSED_LABEL: &str = "▶️";

/// Events kept for the host before the oldest are dropped
pub const MAX_PENDING_EVENTS: usize = 256;

/// Point-in-time view of the player, for hosts and tests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub track_index: usize,
    pub state: PlaybackState,
    pub volume: u8,
    pub seek_fraction: f64,
    pub dragging: bool,
}

/// Music player controller
///
/// `play()`/`pause()` on the audio element are requests. The `playing`
/// flag only changes when the element reports back through
/// [`on_playback_started`](Self::on_playback_started) and
/// [`on_playback_paused`](Self::on_playback_paused).
pub struct PlaybackController<S: Surface, A: AudioElement> {
    surface: S,
    audio: A,
    playlist: Playlist,
    state: PlaybackState,
    volume: Volume,
    seek: SeekBar,
    events: VecDeque<PlaybackEvent>,

    /// A drag was just released; the click that follows it is not a bar click
    drag_released: bool,
}

impl<S: Surface, A: AudioElement> PlaybackController<S, A> {
    /// Create a controller with the first track loaded (not playing)
    pub fn new(playlist: Playlist, audio: A, surface: S, config: &PlaybackConfig) -> Self {
        let mut controller = Self {
            surface,
            audio,
            playlist,
            state: PlaybackState::Paused,
            volume: Volume::new(config.volume),
            seek: SeekBar::new(),
            events: VecDeque::new(),
            drag_released: false,
        };

        controller.load_current();
        controller.set_volume(config.volume);
        controller.events.clear();

        controller
    }

    // ===== Track Control =====

    /// Load a track into the audio element without starting it
    pub fn load_track(&mut self, index: usize) -> Result<()> {
        self.playlist.select(index)?;
        self.load_current();
        Ok(())
    }

    fn load_current(&mut self) {
        let track = self.playlist.current();
        let title = track.display_title();
        debug!(
            index = self.playlist.current_index(),
            source = %track.source,
            "loading track"
        );

        self.audio.set_source(&track.source);
        self.surface.set_text(&ids::MUSIC_TITLE, &title);
        self.audio.load();

        if !self.seek.is_dragging() {
            self.seek.set_fraction(0.0);
            self.render_seek();
        }

        self.push_event(PlaybackEvent::TrackChanged {
            index: self.playlist.current_index(),
            title,
        });
    }

    /// Play button
    pub fn toggle_play(&mut self) {
        match self.state {
            PlaybackState::Playing => self.audio.pause(),
            PlaybackState::Paused => self.audio.play(),
        }
    }

    /// Next button: load the following track (wrapping) and play it
    pub fn next_track(&mut self) {
        let index = self.playlist.next_index();
        self.switch_and_play(index);
    }

    /// Previous button: load the preceding track (wrapping) and play it
    pub fn previous_track(&mut self) {
        let index = self.playlist.previous_index();
        self.switch_and_play(index);
    }

    fn switch_and_play(&mut self, index: usize) {
        // Cyclic indices are always in range
        if self.load_track(index).is_ok() {
            self.audio.play();
        }
    }

    // ===== Audio Element Notifications =====

    /// Audio element started playing
    pub fn on_playback_started(&mut self) {
        self.set_state(PlaybackState::Playing, PLAYING_LABEL);
    }

    /// Audio element paused (also reported right before `ended`)
    pub fn on_playback_paused(&mut self) {
        self.set_state(PlaybackState::Paused, PAUSED_LABEL);
    }

    /// Audio element reached the end of the track: auto-advance
    pub fn on_playback_ended(&mut self) {
        debug!(index = self.playlist.current_index(), "track ended");
        self.next_track();
    }

    /// Audio element reported a new playback position
    ///
    /// Ignored while the user drags the thumb or before the duration is known.
    pub fn on_time_update(&mut self) {
        if self.seek.is_dragging() {
            return;
        }
        let Some(duration) = self.audio.duration() else {
            return;
        };

        self.seek.set_fraction(self.audio.current_time() / duration);
        self.render_seek();
    }

    fn set_state(&mut self, state: PlaybackState, label: &str) {
        self.surface.set_text(&ids::PLAY_BUTTON, label);
        if self.state != state {
            self.state = state;
            self.push_event(PlaybackEvent::StateChanged { state });
        }
    }

    // ===== Volume =====

    /// Volume slider input (0-100)
    pub fn set_volume(&mut self, percent: u8) {
        self.volume.set_level(percent);
        let level = self.volume.level();

        self.audio.set_volume(self.volume.gain());
        self.surface
            .set_value(&ids::VOLUME_SLIDER, &level.to_string());
        self.surface
            .set_text(&ids::VOLUME_DISPLAY, &level.to_string());

        self.push_event(PlaybackEvent::VolumeChanged { level });
    }

    // ===== Seek Bar =====

    /// Thumb pressed
    pub fn begin_drag(&mut self) {
        trace!("seek drag started");
        self.drag_released = false;
        self.seek.begin_drag();
    }

    /// Any pointer press on the page
    ///
    /// A fresh press means the next bar click is a real one.
    pub fn on_pointer_down(&mut self) {
        self.drag_released = false;
    }

    /// Pointer moved; only the visuals follow while dragging
    pub fn update_drag_position(&mut self, pointer_x: f64) {
        if !self.seek.is_dragging() {
            return;
        }
        if let Some(fraction) = self.fraction_at(pointer_x) {
            self.seek.set_fraction(fraction);
            self.render_seek();
        }
    }

    /// Move the visuals to `pointer_x` and seek the media there
    ///
    /// The media is only seeked when its duration is known.
    pub fn commit_seek(&mut self, pointer_x: f64) {
        let Some(fraction) = self.fraction_at(pointer_x) else {
            return;
        };
        self.seek.set_fraction(fraction);
        self.render_seek();

        match self.audio.duration() {
            Some(duration) => {
                let position_secs = fraction * duration;
                trace!(position_secs, "seek committed");
                self.audio.set_current_time(position_secs);
                self.push_event(PlaybackEvent::Seeked {
                    position_secs,
                    fraction,
                });
            }
            None => trace!("seek skipped: duration unknown"),
        }
    }

    /// Pointer released; commits the seek if a drag was in progress
    pub fn end_drag(&mut self, pointer_x: f64) {
        if !self.seek.is_dragging() {
            return;
        }
        self.commit_seek(pointer_x);
        self.seek.end_drag();
        self.drag_released = true;
        trace!("seek drag ended");
    }

    /// Direct click on the bar (not the thumb)
    ///
    /// The click the browser sends after a drag release is swallowed; the
    /// release already committed the seek.
    pub fn click_bar(&mut self, pointer_x: f64) {
        if std::mem::take(&mut self.drag_released) {
            trace!("click after drag release ignored");
            return;
        }
        self.commit_seek(pointer_x);
    }

    fn fraction_at(&self, pointer_x: f64) -> Option<f64> {
        self.surface
            .bounding_rect(&ids::PROGRESS_BAR)
            .and_then(|bar| bar.fraction_at(pointer_x))
    }

    fn render_seek(&mut self) {
        let percent = self.seek.css_percent();
        self.surface.set_style(&ids::PROGRESS_FILL, "width", &percent);
        self.surface.set_style(&ids::PROGRESS_THUMB, "left", &percent);
    }

    // ===== State Queries =====

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_track_index(&self) -> usize {
        self.playlist.current_index()
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    pub fn seek_bar(&self) -> &SeekBar {
        &self.seek
    }

    pub fn is_dragging(&self) -> bool {
        self.seek.is_dragging()
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            track_index: self.playlist.current_index(),
            state: self.state,
            volume: self.volume.level(),
            seek_fraction: self.seek.fraction(),
            dragging: self.seek.is_dragging(),
        }
    }

    fn push_event(&mut self, event: PlaybackEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Take all queued events, oldest first
    ///
    /// At most [`MAX_PENDING_EVENTS`] are kept between drains; older ones
    /// are dropped.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.events.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::default_tracks;
    use keepsake_core::testing::{MockAudio, RecordingSurface};
    use keepsake_core::Rect;

    fn player() -> (
        PlaybackController<RecordingSurface, MockAudio>,
        RecordingSurface,
        MockAudio,
    ) {
        let surface = RecordingSurface::new();
        surface.set_rect(&ids::PROGRESS_BAR, Rect::new(0.0, 200.0));
        let audio = MockAudio::new();
        let controller = PlaybackController::new(
            Playlist::new(default_tracks()).unwrap(),
            audio.clone(),
            surface.clone(),
            &PlaybackConfig::default(),
        );
        (controller, surface, audio)
    }

    #[test]
    fn initial_state() {
        let (mut player, surface, audio) = player();

        assert_eq!(player.state(), PlaybackState::Paused);
        assert_eq!(player.current_track_index(), 0);
        assert_eq!(audio.source().as_deref(), Some("music/after dark.mp3"));
        assert_eq!(audio.load_count(), 1);
        assert_eq!(audio.play_requests(), 0);
        assert_eq!(audio.volume(), Some(0.7));
        assert_eq!(
            surface.text(&ids::MUSIC_TITLE).as_deref(),
            Some("After Dark lofi - Mr.kitty")
        );
        assert_eq!(surface.text(&ids::VOLUME_DISPLAY).as_deref(), Some("70"));
        assert_eq!(surface.value(&ids::VOLUME_SLIDER).as_deref(), Some("70"));
        assert!(player.drain_events().is_empty());
    }

    #[test]
    fn toggle_play_only_requests() {
        let (mut player, _, audio) = player();

        player.toggle_play();
        assert_eq!(audio.play_requests(), 1);
        assert!(!player.is_playing());

        player.on_playback_started();
        player.toggle_play();
        assert_eq!(audio.pause_requests(), 1);
        assert!(player.is_playing());
    }

    #[test]
    fn play_notifications_update_button() {
        let (mut player, surface, _) = player();

        player.on_playback_started();
        assert_eq!(surface.text(&ids::PLAY_BUTTON).as_deref(), Some(PLAYING_LABEL));

        player.on_playback_paused();
        assert_eq!(surface.text(&ids::PLAY_BUTTON).as_deref(), Some(PAUSED_LABEL));
        assert_eq!(
            player.drain_events(),
            vec![
                PlaybackEvent::StateChanged {
                    state: PlaybackState::Playing
                },
                PlaybackEvent::StateChanged {
                    state: PlaybackState::Paused
                },
            ]
        );
    }

    #[test]
    fn load_track_does_not_play() {
        let (mut player, _, audio) = player();
        player.load_track(2).unwrap();

        assert_eq!(audio.source().as_deref(), Some("music/space aquarium.mp3"));
        assert_eq!(audio.load_count(), 2);
        assert_eq!(audio.play_requests(), 0);
    }

    #[test]
    fn load_track_out_of_range() {
        let (mut player, _, audio) = player();
        assert!(player.load_track(3).is_err());
        assert_eq!(player.current_track_index(), 0);
        assert_eq!(audio.load_count(), 1);
    }

    #[test]
    fn set_volume_clamps_and_renders() {
        let (mut player, surface, audio) = player();
        player.set_volume(35);
        assert_eq!(audio.volume(), Some(0.35));
        assert_eq!(surface.text(&ids::VOLUME_DISPLAY).as_deref(), Some("35"));

        player.set_volume(200);
        assert_eq!(player.volume(), 100);
        assert_eq!(audio.volume(), Some(1.0));
    }

    #[test]
    fn time_update_waits_for_duration() {
        let (mut player, surface, audio) = player();
        audio.set_position(30.0);
        player.on_time_update();
        assert_eq!(player.seek_bar().fraction(), 0.0);

        audio.set_duration(120.0);
        player.on_time_update();
        assert_eq!(player.seek_bar().fraction(), 0.25);
        assert_eq!(surface.style(&ids::PROGRESS_FILL, "width").as_deref(), Some("25%"));
        assert_eq!(surface.style(&ids::PROGRESS_THUMB, "left").as_deref(), Some("25%"));
    }

    #[test]
    fn click_without_bar_geometry_is_ignored() {
        let surface = RecordingSurface::new();
        let audio = MockAudio::new();
        let mut player = PlaybackController::new(
            Playlist::new(default_tracks()).unwrap(),
            audio.clone(),
            surface,
            &PlaybackConfig::default(),
        );
        audio.set_duration(100.0);

        player.click_bar(50.0);
        assert!(audio.seeks().is_empty());
    }
}
