//! Pink/cyan theme toggle

use keepsake_core::{ids, Surface};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Colour theme of the page chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Pink,
    Cyan,
}

impl Theme {
    /// Tailwind palette name
    pub fn palette(self) -> &'static str {
        match self {
            Theme::Pink => "pink",
            Theme::Cyan => "cyan",
        }
    }

    /// Class carried by the gallery container
    pub fn container_class(self) -> &'static str {
        match self {
            Theme::Pink => "theme-pink",
            Theme::Cyan => "theme-cyan",
        }
    }

    pub fn header_class(self) -> String {
        let c = self.palette();
        format!("w-full p-6 text-center bg-gradient-to-r from-{c}-100 to-{c}-200 border-b-4 border-{c}-300")
    }

    pub fn heading_class(self) -> String {
        format!("text-5xl font-bold text-{}-800 mb-2", self.palette())
    }

    pub fn subtitle_class(self) -> String {
        format!("text-{}-600 text-lg", self.palette())
    }

    /// Label of the toggle button while this theme is active
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Pink => "🎨 Switch Theme",
            Theme::Cyan => "🎨 Switch to Pink",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Theme::Pink => Theme::Cyan,
            Theme::Cyan => Theme::Pink,
        }
    }
}

/// Owns the active theme and repaints the page chrome on toggle
pub struct ThemeController<S: Surface> {
    surface: S,
    theme: Theme,
}

impl<S: Surface> ThemeController<S> {
    /// Start in the pink theme
    ///
    /// The markup ships pink, so nothing is written here.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            theme: Theme::Pink,
        }
    }

    /// Switch to the other theme and repaint
    pub fn toggle(&mut self) -> Theme {
        let from = self.theme;
        let to = from.other();

        self.surface.replace_class(
            &ids::GALLERY_CONTAINER,
            from.container_class(),
            to.container_class(),
        );
        self.surface
            .set_class_name(&ids::GALLERY_HEADER, &to.header_class());
        self.surface
            .set_class_name(&ids::GALLERY_HEADING, &to.heading_class());
        self.surface
            .set_class_name(&ids::GALLERY_SUBTITLE, &to.subtitle_class());
        self.surface.set_text(&ids::THEME_TOGGLE, to.toggle_label());

        self.theme = to;
        debug!(theme = to.palette(), "theme switched");
        to
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}
