//! Recording audio element

use crate::audio::{known_duration, AudioElement};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Log {
    source: Option<String>,
    loads: usize,
    play_requests: usize,
    pause_requests: usize,
    current_time: f64,
    duration: f64,
    volume: Option<f64>,
    seeks: Vec<f64>,
}

/// Audio element double
///
/// Records every request and lets the test play the part of the media
/// engine (metadata arrival, time progress).
#[derive(Debug, Clone)]
pub struct MockAudio {
    log: Rc<RefCell<Log>>,
}

impl Default for MockAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAudio {
    /// New element with unknown duration
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Log {
                duration: f64::NAN,
                ..Log::default()
            })),
        }
    }

    /// Simulate metadata arrival (NaN for "still unknown")
    pub fn set_duration(&self, seconds: f64) {
        self.log.borrow_mut().duration = seconds;
    }

    /// Simulate playback progress without recording a seek
    pub fn set_position(&self, seconds: f64) {
        self.log.borrow_mut().current_time = seconds;
    }

    pub fn source(&self) -> Option<String> {
        self.log.borrow().source.clone()
    }

    pub fn load_count(&self) -> usize {
        self.log.borrow().loads
    }

    pub fn play_requests(&self) -> usize {
        self.log.borrow().play_requests
    }

    pub fn pause_requests(&self) -> usize {
        self.log.borrow().pause_requests
    }

    pub fn volume(&self) -> Option<f64> {
        self.log.borrow().volume
    }

    /// Every position written through `set_current_time`, in order
    pub fn seeks(&self) -> Vec<f64> {
        self.log.borrow().seeks.clone()
    }
}

impl AudioElement for MockAudio {
    fn set_source(&mut self, uri: &str) {
        let mut log = self.log.borrow_mut();
        log.source = Some(uri.to_string());
        log.current_time = 0.0;
        log.duration = f64::NAN;
    }

    fn load(&mut self) {
        self.log.borrow_mut().loads += 1;
    }

    fn play(&mut self) {
        self.log.borrow_mut().play_requests += 1;
    }

    fn pause(&mut self) {
        self.log.borrow_mut().pause_requests += 1;
    }

    fn current_time(&self) -> f64 {
        self.log.borrow().current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        let mut log = self.log.borrow_mut();
        log.current_time = seconds;
        log.seeks.push(seconds);
    }

    fn duration(&self) -> Option<f64> {
        known_duration(self.log.borrow().duration)
    }

    fn set_volume(&mut self, volume: f64) {
        self.log.borrow_mut().volume = Some(volume);
    }
}
