use std::{
    fmt,
    str::FromStr,
    sync::{Arc, Mutex},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key the chosen theme is persisted under in browser local storage.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Durable home of the user's theme choice.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    slot: Arc<Mutex<Option<Theme>>>,
}

impl MemoryThemeStore {
    pub fn with(theme: Theme) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(theme))),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        *self.slot.lock().expect("should be able to lock theme store")
    }

    fn save(&self, theme: Theme) {
        *self.slot.lock().expect("should be able to lock theme store") = Some(theme);
    }
}

/// Theme to start with: whatever was saved last, else the platform preference.
pub fn initial_theme(store: &impl ThemeStore, prefers_dark: bool) -> Theme {
    store.load().unwrap_or(if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    })
}

/// Flips `current`, persists the result and returns it.
pub fn toggle_theme(store: &impl ThemeStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.save(next);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_theme_wins_over_platform() {
        let store = MemoryThemeStore::with(Theme::Light);
        assert_eq!(initial_theme(&store, true), Theme::Light);

        let store = MemoryThemeStore::with(Theme::Dark);
        assert_eq!(initial_theme(&store, false), Theme::Dark);
    }

    #[test]
    fn test_platform_preference_when_nothing_stored() {
        let store = MemoryThemeStore::default();
        assert_eq!(initial_theme(&store, true), Theme::Dark);
        assert_eq!(initial_theme(&store, false), Theme::Light);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryThemeStore::default();
        let theme = initial_theme(&store, false);

        let theme = toggle_theme(&store, theme);
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.load(), Some(Theme::Dark));

        let theme = toggle_theme(&store, theme);
        assert_eq!(theme, Theme::Light);
        assert_eq!(initial_theme(&store, true), Theme::Light);
    }

    #[test]
    fn test_storage_strings() {
        assert_eq!(Theme::Dark.to_string(), "dark");
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("".parse::<Theme>().is_err());
        assert!("Dark".parse::<Theme>().is_err());
    }
}
