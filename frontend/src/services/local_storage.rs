use gloo::storage::{LocalStorage, Storage};
use healthwatch_backend::{KeyValueStorage, StorageError};
use wasm_bindgen::JsValue;

/// `window.localStorage` as a [`KeyValueStorage`]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

/// DOMException name, or whatever string form the error has
fn describe(value: &JsValue) -> String {
    js_sys::Reflect::get(value, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::ReadFailed {
                key: key.to_string(),
                reason: describe(&e),
            })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                // "QuotaExceededError" when the origin is out of space
                reason: describe(&e),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| StorageError::WriteFailed {
                key: key.to_string(),
                reason: describe(&e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthwatch_backend::{MemoryStorage, PreferenceRepository, IntakeConfig, SymptomReportRepository};
    use shared::Language;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_round_trip_through_local_storage() {
        let storage = BrowserStorage;
        storage.set_item("healthwatch-test", "value").unwrap();
        assert_eq!(storage.get_item("healthwatch-test").unwrap(), Some("value".to_string()));

        storage.remove_item("healthwatch-test").unwrap();
        assert_eq!(storage.get_item("healthwatch-test").unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_language_preference_uses_browser_key() {
        let config = IntakeConfig::default();
        let preferences = PreferenceRepository::new(BrowserStorage, &config);
        preferences.set_language(Language::Bengali).unwrap();

        assert_eq!(
            BrowserStorage.get_item("healthwatch-language").unwrap(),
            Some("bn".to_string())
        );
        BrowserStorage.remove_item("healthwatch-language").unwrap();
    }

    #[wasm_bindgen_test]
    fn test_corrupt_reports_read_as_empty() {
        BrowserStorage.set_item("healthwatch-test-reports", "[{").unwrap();
        let repository = SymptomReportRepository::new(BrowserStorage, "healthwatch-test-reports");
        assert!(repository.load_reports().is_empty());

        // Same behaviour as the in-memory store
        let memory = MemoryStorage::new();
        memory.set_item("healthwatch-test-reports", "[{").unwrap();
        assert!(SymptomReportRepository::new(memory, "healthwatch-test-reports").load_reports().is_empty());

        BrowserStorage.remove_item("healthwatch-test-reports").unwrap();
    }
}
