//! Light/dark theme preference.
//!
//! Persisted as the raw string `"light"` or `"dark"` under the `theme`
//! storage key; anything else restores as light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::{storage, theme};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "dark" { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Navbar toggle glyph: the theme a click switches to.
    #[must_use]
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    /// Read the persisted theme and apply it to the document.
    #[must_use]
    pub fn restore() -> Self {
        let theme = storage::load_raw(THEME_KEY).map_or(Theme::Light, |raw| Theme::parse(&raw));
        theme::apply(theme.as_str());
        Self { theme }
    }

    /// Flip, persist, and apply. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        storage::save_raw(THEME_KEY, self.theme.as_str());
        theme::apply(self.theme.as_str());
        self.theme
    }
}
