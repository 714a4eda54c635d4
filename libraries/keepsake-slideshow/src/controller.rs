//! Slide controller - index, rendering and autoplay

use crate::{
    error::{Result, SlideshowError},
    types::{SlideshowConfig, SlideshowState},
};
use keepsake_core::{ids, IntervalScheduler, Surface, TimerId};
use std::time::Duration;
use tracing::{debug, trace};

/// Class marking the thumbnail of the visible slide
pub const ACTIVE_THUMB_CLASS: &str = "active-thumb";

/// Autoplay toggle label while autoplay runs
pub const AUTOPLAY_RUNNING_LABEL: &str = "⏸️ Stop Auto";

/// Autoplay toggle label while idle
pub const AUTOPLAY_IDLE_LABEL: &str = "▶️ Auto Play";

/// Slide carousel controller
///
/// Owns the current slide index and at most one autoplay timer.
///
/// Navigation naming follows the widget's buttons: `advance` is wired to the
/// "next" button and steps the index *down* (0 → last), `retreat` is wired to
/// "previous" and steps it up.
pub struct SlideController<S: Surface, T: IntervalScheduler> {
    surface: S,
    scheduler: T,
    total_slides: usize,
    current_index: usize,
    autoplay_interval: Duration,

    /// Live autoplay timer. `Some` exactly when autoplay is active.
    autoplay_handle: Option<TimerId>,
}

impl<S: Surface, T: IntervalScheduler> SlideController<S, T> {
    /// Create a controller positioned on the first slide and render it
    pub fn new(config: SlideshowConfig, scheduler: T, surface: S) -> Result<Self> {
        if config.total_slides == 0 {
            return Err(SlideshowError::NoSlides);
        }
        if config.autoplay_interval_ms == 0 {
            return Err(SlideshowError::InvalidInterval(0));
        }

        let mut controller = Self {
            surface,
            scheduler,
            total_slides: config.total_slides,
            current_index: 0,
            autoplay_interval: config.autoplay_interval(),
            autoplay_handle: None,
        };

        controller
            .surface
            .set_text(&ids::TOTAL_SLIDES, &controller.total_slides.to_string());
        controller
            .surface
            .set_text(&ids::AUTOPLAY_TOGGLE, AUTOPLAY_IDLE_LABEL);
        controller.render();

        Ok(controller)
    }

    // ===== Navigation =====

    /// Step to the neighbouring slide on the "next" side (index - 1, wrapping)
    pub fn advance(&mut self) {
        self.current_index = step_back(self.current_index, self.total_slides);
        trace!(index = self.current_index, "slide advance");
        self.render();
    }

    /// Step to the neighbouring slide on the "previous" side (index + 1, wrapping)
    pub fn retreat(&mut self) {
        self.current_index = step_forward(self.current_index, self.total_slides);
        trace!(index = self.current_index, "slide retreat");
        self.render();
    }

    /// Jump to an explicit slide
    ///
    /// An out-of-range index leaves the controller untouched.
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.total_slides {
            return Err(SlideshowError::IndexOutOfBounds {
                index,
                total: self.total_slides,
            });
        }

        self.current_index = index;
        trace!(index, "slide go_to");
        self.render();
        Ok(())
    }

    // ===== User interaction =====
    //
    // Manual navigation while autoplay runs restarts the countdown.

    /// "Next" button
    pub fn user_advance(&mut self) {
        self.advance();
        self.restart_autoplay_if_active();
    }

    /// "Previous" button
    pub fn user_retreat(&mut self) {
        self.retreat();
        self.restart_autoplay_if_active();
    }

    /// Thumbnail click
    pub fn user_go_to(&mut self, index: usize) -> Result<()> {
        self.go_to(index)?;
        self.restart_autoplay_if_active();
        Ok(())
    }

    fn restart_autoplay_if_active(&mut self) {
        if self.is_autoplaying() {
            self.stop_autoplay();
            self.start_autoplay();
        }
    }

    // ===== Autoplay =====

    /// Start advancing every autoplay interval
    ///
    /// Any running timer is cleared first, so there is never more than one.
    pub fn start_autoplay(&mut self) {
        self.clear_timer();

        let handle = self.scheduler.set_interval(self.autoplay_interval);
        self.autoplay_handle = Some(handle);
        debug!(
            timer = handle.raw(),
            interval_ms = self.autoplay_interval.as_millis() as u64,
            "slideshow autoplay started"
        );

        self.surface
            .set_text(&ids::AUTOPLAY_TOGGLE, AUTOPLAY_RUNNING_LABEL);
    }

    /// Stop autoplay (safe to call when already stopped)
    pub fn stop_autoplay(&mut self) {
        if self.clear_timer() {
            debug!("slideshow autoplay stopped");
        }
        self.surface.set_text(&ids::AUTOPLAY_TOGGLE, AUTOPLAY_IDLE_LABEL);
    }

    /// Autoplay toggle button
    pub fn toggle_autoplay(&mut self) {
        if self.is_autoplaying() {
            self.stop_autoplay();
        } else {
            self.start_autoplay();
        }
    }

    /// Timer firing delivered by the platform
    ///
    /// Firings from a timer that is no longer the live handle are ignored.
    pub fn on_timer(&mut self, id: TimerId) {
        if self.autoplay_handle == Some(id) {
            self.advance();
        } else {
            trace!(timer = id.raw(), "ignoring stale autoplay timer");
        }
    }

    /// Stop autoplay before teardown
    pub fn shutdown(&mut self) {
        self.stop_autoplay();
    }

    /// Returns true if a timer was running
    fn clear_timer(&mut self) -> bool {
        match self.autoplay_handle.take() {
            Some(handle) => {
                self.scheduler.clear_interval(handle);
                true
            }
            None => false,
        }
    }

    // ===== Rendering =====

    /// Push the current position to the surface
    ///
    /// Slides sit side by side in one track; the track shifts left by one
    /// full width per index. Exactly one thumbnail is marked active.
    pub fn render(&mut self) {
        let offset = self.current_index * 100;
        self.surface.set_style(
            &ids::SLIDESHOW_TRACK,
            "transform",
            &format!("translateX(-{}%)", offset),
        );
        self.surface
            .set_text(&ids::CURRENT_SLIDE, &(self.current_index + 1).to_string());

        for index in 0..self.total_slides {
            self.surface.toggle_class(
                &ids::thumbnail(index),
                ACTIVE_THUMB_CLASS,
                index == self.current_index,
            );
        }
    }

    // ===== State Queries =====

    /// Index of the visible slide (0-based)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of slides
    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    /// Whether autoplay is running
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay_handle.is_some()
    }

    /// Autoplay state
    pub fn state(&self) -> SlideshowState {
        if self.is_autoplaying() {
            SlideshowState::AutoPlaying
        } else {
            SlideshowState::Idle
        }
    }

    /// Live autoplay timer, if any
    pub fn autoplay_handle(&self) -> Option<TimerId> {
        self.autoplay_handle
    }

    /// Rendering surface (for hosts that share it)
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: Surface, T: IntervalScheduler> Drop for SlideController<S, T> {
    fn drop(&mut self) {
        self.clear_timer();
    }
}

/// `(index - 1) mod total`, never negative
fn step_back(index: usize, total: usize) -> usize {
    (index + total - 1) % total
}

/// `(index + 1) mod total`
fn step_forward(index: usize, total: usize) -> usize {
    (index + 1) % total
}

#[cfg(test)]
mod tests {
    use super::*;
    use keepsake_core::testing::{ManualScheduler, RecordingSurface};

    fn controller(
        total_slides: usize,
    ) -> (
        SlideController<RecordingSurface, ManualScheduler>,
        RecordingSurface,
        ManualScheduler,
    ) {
        let surface = RecordingSurface::new();
        let scheduler = ManualScheduler::new();
        let config = SlideshowConfig {
            total_slides,
            ..SlideshowConfig::default()
        };
        let controller =
            SlideController::new(config, scheduler.clone(), surface.clone()).unwrap();
        (controller, surface, scheduler)
    }

    #[test]
    fn starts_on_first_slide() {
        let (controller, surface, _) = controller(6);
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.state(), SlideshowState::Idle);
        assert_eq!(surface.text(&ids::CURRENT_SLIDE).as_deref(), Some("1"));
        assert_eq!(surface.text(&ids::TOTAL_SLIDES).as_deref(), Some("6"));
        assert_eq!(
            surface.text(&ids::AUTOPLAY_TOGGLE).as_deref(),
            Some(AUTOPLAY_IDLE_LABEL)
        );
    }

    #[test]
    fn rejects_empty_slideshow() {
        let config = SlideshowConfig {
            total_slides: 0,
            ..SlideshowConfig::default()
        };
        let result = SlideController::new(config, ManualScheduler::new(), RecordingSurface::new());
        assert_eq!(result.err(), Some(SlideshowError::NoSlides));
    }

    #[test]
    fn rejects_zero_interval() {
        let config = SlideshowConfig {
            autoplay_interval_ms: 0,
            ..SlideshowConfig::default()
        };
        let result = SlideController::new(config, ManualScheduler::new(), RecordingSurface::new());
        assert_eq!(result.err(), Some(SlideshowError::InvalidInterval(0)));
    }

    #[test]
    fn advance_wraps_backwards_from_first_slide() {
        let (mut controller, surface, _) = controller(6);
        controller.advance();
        assert_eq!(controller.current_index(), 5);
        assert_eq!(surface.text(&ids::CURRENT_SLIDE).as_deref(), Some("6"));
        assert_eq!(
            surface.style(&ids::SLIDESHOW_TRACK, "transform").as_deref(),
            Some("translateX(-500%)")
        );
    }

    #[test]
    fn retreat_wraps_forwards_from_last_slide() {
        let (mut controller, _, _) = controller(6);
        controller.go_to(5).unwrap();
        controller.retreat();
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn advance_then_retreat_is_identity() {
        let (mut controller, _, _) = controller(6);
        controller.go_to(2).unwrap();
        controller.advance();
        controller.retreat();
        assert_eq!(controller.current_index(), 2);
    }

    #[test]
    fn go_to_out_of_range_leaves_state() {
        let (mut controller, _, _) = controller(6);
        controller.go_to(3).unwrap();
        assert_eq!(
            controller.go_to(6),
            Err(SlideshowError::IndexOutOfBounds { index: 6, total: 6 })
        );
        assert_eq!(controller.current_index(), 3);
    }

    #[test]
    fn single_slide_stays_put() {
        let (mut controller, _, _) = controller(1);
        controller.advance();
        controller.retreat();
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn toggle_switches_state_and_label() {
        let (mut controller, surface, scheduler) = controller(6);

        controller.toggle_autoplay();
        assert_eq!(controller.state(), SlideshowState::AutoPlaying);
        assert_eq!(scheduler.active_count(), 1);
        assert_eq!(
            surface.text(&ids::AUTOPLAY_TOGGLE).as_deref(),
            Some(AUTOPLAY_RUNNING_LABEL)
        );

        controller.toggle_autoplay();
        assert_eq!(controller.state(), SlideshowState::Idle);
        assert_eq!(scheduler.active_count(), 0);
        assert_eq!(
            surface.text(&ids::AUTOPLAY_TOGGLE).as_deref(),
            Some(AUTOPLAY_IDLE_LABEL)
        );
    }

    #[test]
    fn stop_when_idle_is_noop() {
        let (mut controller, _, scheduler) = controller(6);
        controller.stop_autoplay();
        controller.stop_autoplay();
        assert!(!controller.is_autoplaying());
        assert_eq!(scheduler.active_count(), 0);
    }

    #[test]
    fn stale_timer_is_ignored() {
        let (mut controller, _, _) = controller(6);
        controller.start_autoplay();
        let first = controller.autoplay_handle().unwrap();
        controller.start_autoplay();

        controller.on_timer(first);
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn drop_clears_timer() {
        let (mut controller, _, scheduler) = controller(6);
        controller.start_autoplay();
        assert_eq!(scheduler.active_count(), 1);

        drop(controller);
        assert_eq!(scheduler.active_count(), 0);
    }
}
