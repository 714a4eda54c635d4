//! `<audio>` element adapter

use keepsake_core::{known_duration, AudioElement};
use wasm_bindgen::JsValue;
use web_sys::HtmlAudioElement;

/// [`AudioElement`] over a detached `HtmlAudioElement`
#[derive(Clone)]
pub struct HtmlAudio {
    element: HtmlAudioElement,
}

impl HtmlAudio {
    /// Create a new, detached audio element
    pub fn new() -> Result<Self, JsValue> {
        let element = HtmlAudioElement::new()?;
        element.set_preload("metadata");
        Ok(Self { element })
    }

    /// Underlying element, for attaching media event listeners
    pub fn element(&self) -> &HtmlAudioElement {
        &self.element
    }
}

impl AudioElement for HtmlAudio {
    fn set_source(&mut self, source: &str) {
        self.element.set_src(source);
    }

    fn load(&mut self) {
        self.element.load();
    }

    fn play(&mut self) {
        // Resolves or rejects later; the `play` media event is what counts
        if let Err(err) = self.element.play() {
            tracing::warn!(error = ?err, "audio play request rejected");
        }
    }

    fn pause(&mut self) {
        if let Err(err) = self.element.pause() {
            tracing::warn!(error = ?err, "audio pause request rejected");
        }
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn duration(&self) -> Option<f64> {
        known_duration(self.element.duration())
    }

    fn set_volume(&mut self, gain: f64) {
        self.element.set_volume(gain);
    }
}
