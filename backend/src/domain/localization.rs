//! Translation tables and dotted-key lookup.
//!
//! Each language ships as a YAML file under `locales/`, compiled into the
//! binary. Keys are dotted paths into the nested tables, e.g.
//! `symptoms.submitButton`.
//!
//! A key that is missing, empty, or points at a table rather than a string
//! resolves to the key itself, so an untranslated label degrades to
//! something readable instead of an empty node.

use log::error;
use serde_yaml::Value;
use shared::Language;
use std::collections::HashMap;

const EN: &str = include_str!("../../locales/en.yaml");
const HI: &str = include_str!("../../locales/hi.yaml");
const AS: &str = include_str!("../../locales/as.yaml");
const BN: &str = include_str!("../../locales/bn.yaml");

#[derive(Debug, Clone, Default)]
pub struct Translations {
    tables: HashMap<Language, Value>,
}

impl Translations {
    /// Tables for every language shipped with the app
    pub fn bundled() -> Self {
        let mut translations = Self::default();
        for (language, source) in [
            (Language::English, EN),
            (Language::Hindi, HI),
            (Language::Assamese, AS),
            (Language::Bengali, BN),
        ] {
            if let Err(e) = translations.load_yaml(language, source) {
                error!("❌ Translation table for '{}' is invalid: {}", language.code(), e);
            }
        }
        translations
    }

    /// Parse and install a translation table, replacing any previous one
    pub fn load_yaml(&mut self, language: Language, source: &str) -> Result<(), serde_yaml::Error> {
        let table: Value = serde_yaml::from_str(source)?;
        self.tables.insert(language, table);
        Ok(())
    }

    pub fn has_language(&self, language: Language) -> bool {
        self.tables.contains_key(&language)
    }

    /// Resolve a dotted key, `None` when it does not lead to a non-empty string
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        let mut node = self.tables.get(&language)?;
        for segment in key.split('.') {
            node = node.as_mapping()?.get(segment)?;
        }
        node.as_str().filter(|text| !text.is_empty())
    }

    /// Translate `key`, falling back to the key itself
    pub fn t(&self, language: Language, key: &str) -> String {
        self.lookup(language, key).unwrap_or(key).to_string()
    }

    /// Translate `key`, falling back to `default`
    pub fn t_or(&self, language: Language, key: &str, default: &str) -> String {
        self.lookup(language, key).unwrap_or(default).to_string()
    }
}
