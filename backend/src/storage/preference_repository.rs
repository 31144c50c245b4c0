//! # Preference Repository
//!
//! Persists the language and theme chosen in the page chrome. Each lives
//! under its own key as a bare code (`"hi"`, `"dark"`), matching what the
//! browser build writes.

use log::{debug, warn};
use shared::{Language, ThemePreference};

use super::traits::{KeyValueStorage, StorageError};
use crate::config::IntakeConfig;

#[derive(Clone)]
pub struct PreferenceRepository<K: KeyValueStorage> {
    storage: K,
    language_key: String,
    theme_key: String,
}

impl<K: KeyValueStorage> PreferenceRepository<K> {
    pub fn new(storage: K, config: &IntakeConfig) -> Self {
        Self {
            storage,
            language_key: config.language_key.clone(),
            theme_key: config.theme_key.clone(),
        }
    }

    /// Saved language, `None` when nothing or an unknown code is stored
    pub fn get_language(&self) -> Option<Language> {
        let code = self.read(&self.language_key)?;
        let language = Language::from_code(code.trim());
        if language.is_none() {
            debug!("Ignoring unknown saved language code '{}'", code);
        }
        language
    }

    pub fn set_language(&self, language: Language) -> Result<(), StorageError> {
        self.storage.set_item(&self.language_key, language.code())
    }

    /// Saved theme, `None` when nothing or an unknown value is stored
    pub fn get_theme(&self) -> Option<ThemePreference> {
        let value = self.read(&self.theme_key)?;
        ThemePreference::from_string(value.trim())
    }

    pub fn set_theme(&self, theme: ThemePreference) -> Result<(), StorageError> {
        self.storage.set_item(&self.theme_key, theme.as_str())
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("⚠️ Could not read preference '{}': {}", key, e);
                None
            }
        }
    }
}
