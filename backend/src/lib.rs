//! # HealthWatch Backend
//!
//! Contains all non-UI logic for the HealthWatch symptom intake page.
//!
//! ```text
//! UI Layer (Yew frontend)
//!     ↓
//! Domain Layer (validation, submit lifecycle, localization, preferences)
//!     ↓
//! Storage Layer (key-value store: localStorage, files or memory)
//! ```
//!
//! The crate has no I/O layer of its own. The browser build wires
//! `window.localStorage` in as the [`storage::KeyValueStorage`]; native
//! builds use [`storage::FileStorage`] under the platform data directory.

pub mod config;
pub mod domain;
pub mod storage;

use anyhow::Result;
use log::info;
use std::sync::Arc;

pub use config::IntakeConfig;
pub use domain::*;
pub use storage::*;

/// Everything the intake page needs, built over one key-value store
pub struct Backend<K: KeyValueStorage + Clone> {
    pub config: IntakeConfig,
    pub reports: SymptomReportRepository<K>,
    pub submission: SubmissionController<SymptomReportRepository<K>>,
    pub language: LanguageContext<K>,
    pub theme: ThemeContext<K>,
}

impl<K: KeyValueStorage + Clone> Backend<K> {
    pub fn new(storage: K, config: IntakeConfig) -> Self {
        info!("Setting up symptom report storage under '{}'", config.reports_key);
        let reports = SymptomReportRepository::new(storage.clone(), config.reports_key.clone());
        let submission = SubmissionController::from_config(reports.clone(), &config);

        info!("Setting up preferences");
        let preferences = PreferenceRepository::new(storage, &config);
        let language = LanguageContext::initialize(
            preferences.clone(),
            Arc::new(Translations::bundled()),
            &config,
        );
        let theme = ThemeContext::initialize(preferences);

        Self {
            config,
            reports,
            submission,
            language,
            theme,
        }
    }
}

impl Backend<FileStorage> {
    /// Open the file-backed store in the configured data directory
    pub fn open(config: IntakeConfig) -> Result<Self> {
        let storage = FileStorage::from_config(&config)?;
        info!("Using data directory {}", storage.base_directory().display());
        Ok(Self::new(storage, config))
    }
}
