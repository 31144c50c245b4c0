//! Page-wide language and theme contexts.
//!
//! Both are created once at the page root, read through plain accessors and
//! updated through setters that also persist the new value. The UI layer
//! hands them down explicitly instead of reaching for globals.

use log::{info, warn};
use shared::{Language, ThemePreference};
use std::sync::Arc;

use super::localization::Translations;
use crate::config::IntakeConfig;
use crate::storage::{KeyValueStorage, PreferenceRepository, StorageError};

/// Current language plus the `t(key)` lookup
#[derive(Clone)]
pub struct LanguageContext<K: KeyValueStorage> {
    repository: PreferenceRepository<K>,
    translations: Arc<Translations>,
    current: Language,
}

impl<K: KeyValueStorage> LanguageContext<K> {
    /// Start from the saved language, or the configured default when nothing
    /// usable is saved
    pub fn initialize(
        repository: PreferenceRepository<K>,
        translations: Arc<Translations>,
        config: &IntakeConfig,
    ) -> Self {
        let current = repository.get_language().unwrap_or(config.default_language);
        info!("🌐 Language initialized to '{}'", current.code());
        Self {
            repository,
            translations,
            current,
        }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Switch language and persist the choice. The switch takes effect even
    /// if persisting fails; the error is returned for the caller to log.
    pub fn set_language(&mut self, language: Language) -> Result<(), StorageError> {
        self.current = language;
        self.repository.set_language(language).map_err(|e| {
            warn!("⚠️ Could not persist language '{}': {}", language.code(), e);
            e
        })
    }

    pub fn t(&self, key: &str) -> String {
        self.translations.t(self.current, key)
    }

    pub fn t_or(&self, key: &str, default: &str) -> String {
        self.translations.t_or(self.current, key, default)
    }
}

/// Chosen colour scheme
#[derive(Clone)]
pub struct ThemeContext<K: KeyValueStorage> {
    repository: PreferenceRepository<K>,
    current: ThemePreference,
}

impl<K: KeyValueStorage> ThemeContext<K> {
    pub fn initialize(repository: PreferenceRepository<K>) -> Self {
        let current = repository.get_theme().unwrap_or_default();
        Self { repository, current }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn set_theme(&mut self, theme: ThemePreference) -> Result<(), StorageError> {
        self.current = theme;
        self.repository.set_theme(theme).map_err(|e| {
            warn!("⚠️ Could not persist theme '{}': {}", theme.as_str(), e);
            e
        })
    }

    /// Flip between light and dark. `System` flips to dark.
    pub fn toggle(&mut self) -> Result<ThemePreference, StorageError> {
        let next = match self.current {
            ThemePreference::Dark => ThemePreference::Light,
            ThemePreference::Light | ThemePreference::System => ThemePreference::Dark,
        };
        self.set_theme(next)?;
        Ok(next)
    }

    /// Whether the dark palette applies, given the platform preference
    pub fn resolve_dark(&self, system_prefers_dark: bool) -> bool {
        match self.current {
            ThemePreference::Light => false,
            ThemePreference::Dark => true,
            ThemePreference::System => system_prefers_dark,
        }
    }
}
