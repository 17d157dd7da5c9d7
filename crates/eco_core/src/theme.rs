//! Light/dark theme preference, persisted as a single string flag.

use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Document-wide class present while the dark theme is active.
pub const DARK_THEME_CLASS: &str = "dark-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` reads as light.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn root_class(self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_THEME_CLASS)
    }

    /// Label of the toggle control: names the action, i.e. the other theme.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "☀️ Light",
            Theme::Light => "🌙 Dark",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeManager {
    key: String,
    current: Theme,
}

impl ThemeManager {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            current: Theme::default(),
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle_label(&self) -> &'static str {
        self.current.toggle_label()
    }

    pub fn root_class(&self) -> Option<&'static str> {
        self.current.root_class()
    }

    /// Reads the persisted flag (default light) and applies it.
    pub fn initialize<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Theme {
        let saved = self.read_flag(store);
        self.apply(store, saved)
    }

    /// Makes `theme` current and persists it. A failed write is logged and
    /// the theme still applies for this session.
    pub fn apply<S: KeyValueStore + ?Sized>(&mut self, store: &mut S, theme: Theme) -> Theme {
        self.current = theme;
        if let Err(e) = store.set(&self.key, theme.as_str()) {
            warn!(error = %e, theme = theme.as_str(), "could not persist theme");
        }
        info!(theme = theme.as_str(), "theme applied");
        theme
    }

    /// Flips the persisted flag, not the in-memory value.
    pub fn toggle<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Theme {
        let persisted = self.read_flag(store);
        self.apply(store, persisted.opposite())
    }

    fn read_flag<S: KeyValueStore + ?Sized>(&self, store: &S) -> Theme {
        match store.get(&self.key) {
            Ok(Some(flag)) => Theme::from_flag(&flag),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!(error = %e, "could not read theme flag, keeping current");
                self.current
            }
        }
    }
}
