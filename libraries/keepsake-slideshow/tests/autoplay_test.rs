//! Integration tests for slideshow autoplay
//!
//! Drives the controller through a virtual clock and checks how many
//! advances actually happen.

use keepsake_core::{ids, testing::ManualScheduler, testing::RecordingSurface};
use keepsake_slideshow::{
    SlideController, SlideshowConfig, SlideshowState, ACTIVE_THUMB_CLASS, AUTOPLAY_IDLE_LABEL,
    AUTOPLAY_RUNNING_LABEL,
};
use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

// ===== Test Helpers =====

struct Harness {
    slides: SlideController<RecordingSurface, ManualScheduler>,
    surface: RecordingSurface,
    clock: ManualScheduler,
}

impl Harness {
    fn new() -> Self {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::TRACE)
                .try_init();
        });

        let surface = RecordingSurface::new();
        let clock = ManualScheduler::new();
        let slides =
            SlideController::new(SlideshowConfig::default(), clock.clone(), surface.clone())
                .expect("default slideshow");

        Self {
            slides,
            surface,
            clock,
        }
    }

    /// Move time forward, delivering every timer firing; returns the firing count
    fn run_for(&mut self, millis: u64) -> usize {
        let fired = self.clock.advance(Duration::from_millis(millis));
        for timer in &fired {
            self.slides.on_timer(*timer);
        }
        fired.len()
    }

    fn active_thumbnails(&self) -> Vec<usize> {
        (0..self.slides.total_slides())
            .filter(|i| self.surface.has_class(&ids::thumbnail(*i), ACTIVE_THUMB_CLASS))
            .collect()
    }
}

// ===== Autoplay =====

#[test]
fn autoplay_advances_once_per_interval() {
    let mut h = Harness::new();
    h.slides.start_autoplay();

    assert_eq!(h.run_for(2999), 0);
    assert_eq!(h.slides.current_index(), 0);

    assert_eq!(h.run_for(1), 1);
    assert_eq!(h.slides.current_index(), 5);

    assert_eq!(h.run_for(9000), 3);
    assert_eq!(h.slides.current_index(), 2);
}

#[test]
fn double_start_keeps_a_single_timer() {
    let mut h = Harness::new();
    h.slides.start_autoplay();
    h.slides.start_autoplay();

    assert_eq!(h.clock.active_count(), 1);
    assert_eq!(h.run_for(3000), 1);
    assert_eq!(h.slides.current_index(), 5);
    assert_eq!(h.run_for(3000), 1);
    assert_eq!(h.slides.current_index(), 4);
}

#[test]
fn stop_halts_advancement() {
    let mut h = Harness::new();
    h.slides.start_autoplay();
    h.run_for(3000);
    h.slides.stop_autoplay();

    assert_eq!(h.run_for(30_000), 0);
    assert_eq!(h.slides.current_index(), 5);
    assert_eq!(h.slides.state(), SlideshowState::Idle);
    assert_eq!(
        h.surface.text(&ids::AUTOPLAY_TOGGLE).as_deref(),
        Some(AUTOPLAY_IDLE_LABEL)
    );
}

#[test]
fn manual_navigation_restarts_countdown() {
    let mut h = Harness::new();
    h.slides.start_autoplay();

    h.run_for(2000);
    h.slides.user_retreat();
    assert_eq!(h.slides.current_index(), 1);

    // Old deadline (t = 3000) passes without an advance
    assert_eq!(h.run_for(1500), 0);
    assert_eq!(h.slides.current_index(), 1);

    // New deadline is 3000 ms after the click (t = 5000)
    assert_eq!(h.run_for(1500), 1);
    assert_eq!(h.slides.current_index(), 0);
    assert_eq!(h.clock.active_count(), 1);
    assert_eq!(
        h.surface.text(&ids::AUTOPLAY_TOGGLE).as_deref(),
        Some(AUTOPLAY_RUNNING_LABEL)
    );
}

#[test]
fn manual_navigation_when_idle_does_not_start_autoplay() {
    let mut h = Harness::new();
    h.slides.user_advance();
    h.slides.user_go_to(2).unwrap();

    assert!(!h.slides.is_autoplaying());
    assert_eq!(h.clock.active_count(), 0);
}

#[test]
fn failed_thumbnail_jump_keeps_countdown() {
    let mut h = Harness::new();
    h.slides.start_autoplay();
    h.run_for(2000);

    assert!(h.slides.user_go_to(99).is_err());
    assert_eq!(h.run_for(1000), 1);
}

#[test]
fn shutdown_clears_timer_and_label() {
    let mut h = Harness::new();
    h.slides.start_autoplay();
    h.slides.shutdown();

    assert_eq!(h.clock.active_count(), 0);
    assert_eq!(
        h.surface.text(&ids::AUTOPLAY_TOGGLE).as_deref(),
        Some(AUTOPLAY_IDLE_LABEL)
    );
}

// ===== Rendering =====

#[test]
fn thumbnail_click_renders_position() {
    let mut h = Harness::new();
    h.slides.user_go_to(3).unwrap();

    assert_eq!(h.slides.current_index(), 3);
    assert_eq!(h.surface.text(&ids::CURRENT_SLIDE).as_deref(), Some("4"));
    assert_eq!(
        h.surface.style(&ids::SLIDESHOW_TRACK, "transform").as_deref(),
        Some("translateX(-300%)")
    );
    assert_eq!(h.active_thumbnails(), vec![3]);
}

#[test]
fn autoplay_moves_active_thumbnail() {
    let mut h = Harness::new();
    h.slides.start_autoplay();
    h.run_for(6000);

    assert_eq!(h.active_thumbnails(), vec![4]);
    assert_eq!(h.surface.text(&ids::CURRENT_SLIDE).as_deref(), Some("5"));
}
