//! Settings Repository
//!
//! App-wide theme and language, persisted individually.

use log::warn;
use serde::{Deserialize, Serialize};

use super::traits::SharedStore;

pub const KEY_THEME: &str = "app_theme";
pub const KEY_LANGUAGE: &str = "app_language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// UI language; `Fa` is right-to-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fa,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Fa => "fa",
            Language::En => "en",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "en" => Language::En,
            _ => Language::Fa,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Fa)
    }
}

/// Store-backed app settings
pub struct SettingsRepository {
    store: SharedStore,
    theme: Theme,
    language: Language,
}

impl SettingsRepository {
    pub fn load(store: SharedStore) -> Self {
        let theme = match store.get(KEY_THEME) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            Ok(None) => Theme::default(),
            Err(e) => {
                warn!("failed to read '{}', using default: {}", KEY_THEME, e);
                Theme::default()
            }
        };
        let language = match store.get(KEY_LANGUAGE) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            Ok(None) => Language::default(),
            Err(e) => {
                warn!("failed to read '{}', using default: {}", KEY_LANGUAGE, e);
                Language::default()
            }
        };
        Self {
            store,
            theme,
            language,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.persist(KEY_THEME, &self.theme);
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.persist(KEY_LANGUAGE, &self.language);
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => {
                if let Err(e) = self.store.set(key, &json) {
                    warn!("failed to persist '{}', keeping in-memory state: {}", key, e);
                }
            }
            Err(e) => warn!("failed to serialize '{}': {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_defaults() {
        let repo = SettingsRepository::load(Arc::new(MemoryStore::new()));
        assert_eq!(repo.theme(), Theme::Light);
        assert_eq!(repo.language(), Language::Fa);
        assert!(repo.language().is_rtl());
    }

    #[test]
    fn test_settings_survive_reload() {
        let store = Arc::new(MemoryStore::new());
        {
            let mut repo = SettingsRepository::load(store.clone());
            repo.set_theme(Theme::Dark);
            repo.set_language(Language::En);
        }
        let repo = SettingsRepository::load(store);
        assert_eq!(repo.theme(), Theme::Dark);
        assert_eq!(repo.language(), Language::En);
    }
}
