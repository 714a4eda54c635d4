//! Gallery widget assembly
//!
//! Wires the slideshow, the music player, the theme toggle and the host
//! content adapter onto one rendering surface. The pieces share the surface
//! but no state.

use crate::{
    content::{default_config, ContentAdapter, ContentKey},
    error::Result,
    settings::WidgetSettings,
    story,
    theme::{Theme, ThemeController},
};
use keepsake_core::{AudioElement, IntervalScheduler, Surface, TimerId};
use keepsake_playback::{PlaybackController, Playlist};
use keepsake_slideshow::SlideController;
use serde_json::{Map, Value};
use tracing::info;

/// The whole gallery widget
///
/// `S` must be cheaply cloneable with clones drawing to the same place
/// (an `Rc`-backed recording surface, a document handle).
pub struct GalleryWidget<S, A, T>
where
    S: Surface + Clone,
    A: AudioElement,
    T: IntervalScheduler,
{
    slides: SlideController<S, T>,
    player: PlaybackController<S, A>,
    theme: ThemeController<S>,
    content: ContentAdapter<S>,
    surface: S,
}

impl<S, A, T> GalleryWidget<S, A, T>
where
    S: Surface + Clone,
    A: AudioElement,
    T: IntervalScheduler,
{
    /// Build and render the widget
    ///
    /// The first track is loaded (not playing), slide 1 is shown, and the
    /// default text content is applied.
    pub fn new(settings: WidgetSettings, surface: S, audio: A, scheduler: T) -> Result<Self> {
        let slides = SlideController::new(settings.slideshow, scheduler, surface.clone())?;
        let playlist = Playlist::new(settings.tracks)?;
        let player = PlaybackController::new(playlist, audio, surface.clone(), &settings.playback);
        let theme = ThemeController::new(surface.clone());
        let mut content = ContentAdapter::new(surface.clone());

        content.on_config_change(default_config());

        info!(
            slides = slides.total_slides(),
            tracks = player.playlist().len(),
            "gallery widget mounted"
        );

        Ok(Self {
            slides,
            player,
            theme,
            content,
            surface,
        })
    }

    // ===== Components =====

    pub fn slides(&self) -> &SlideController<S, T> {
        &self.slides
    }

    pub fn slides_mut(&mut self) -> &mut SlideController<S, T> {
        &mut self.slides
    }

    pub fn player(&self) -> &PlaybackController<S, A> {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlaybackController<S, A> {
        &mut self.player
    }

    pub fn content(&self) -> &ContentAdapter<S> {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut ContentAdapter<S> {
        &mut self.content
    }

    // ===== Page Events =====

    /// Theme toggle button
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle()
    }

    pub fn theme(&self) -> Theme {
        self.theme.theme()
    }

    /// Story text box input
    pub fn on_story_input(&mut self) {
        story::resize_story_box(&mut self.surface);
    }

    /// Autoplay timer firing
    pub fn on_timer(&mut self, id: TimerId) {
        self.slides.on_timer(id);
    }

    /// Partial configuration pushed by the host
    pub fn on_config_change(&mut self, partial: Map<String, Value>) {
        self.content.on_config_change(partial);
    }

    /// Effective text for one host-editable slot
    pub fn content_text(&self, key: ContentKey) -> String {
        self.content.effective(key)
    }

    /// Stop the autoplay timer before the widget is torn down
    pub fn shutdown(&mut self) {
        self.slides.shutdown();
        info!("gallery widget shut down");
    }
}
