//! # File Storage
//!
//! A [`KeyValueStorage`] backed by a data directory on disk, for running the
//! intake flow outside a browser. Each key is stored in its own file.
//!
//! ## File Structure
//!
//! ```text
//! HealthWatch/
//! ├── symptomReports.value        ← JSON array of reports, newest first
//! ├── healthwatch-language.value
//! └── theme.value
//! ```
//!
//! Writes go to a `.tmp` sibling first and are then renamed over the target,
//! so a failed write never leaves a half-written value behind.

use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::traits::{KeyValueStorage, StorageError};
use crate::config::IntakeConfig;

#[derive(Clone, Debug)]
pub struct FileStorage {
    base_directory: PathBuf,
}

impl FileStorage {
    /// Create a file store rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self, StorageError> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Unavailable(format!(
                    "cannot create data directory {}: {}",
                    base_path.display(),
                    e
                ))
            })?;
            info!("📁 Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a file store in the configured data directory
    pub fn from_config(config: &IntakeConfig) -> Result<Self, StorageError> {
        let directory = config
            .data_directory()
            .ok_or_else(|| StorageError::Unavailable("could not determine a data directory".to_string()))?;
        Self::new(directory)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Map a storage key to a file name that is safe on every platform.
    ///
    /// ASCII letters, digits and `-` pass through; every other byte becomes
    /// `_XX` (upper-case hex). `_` is escaped too, so distinct keys always
    /// map to distinct files.
    pub fn safe_file_name(key: &str) -> String {
        let mut stem = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                stem.push(byte as char);
            } else {
                stem.push_str(&format!("_{:02X}", byte));
            }
        }
        format!("{}.value", stem)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_directory.join(Self::safe_file_name(key))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let write_failed = |e: io::Error| StorageError::WriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        };

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value).map_err(write_failed)?;
        fs::rename(&temp_path, &path).map_err(write_failed)?;

        debug!("💾 Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::WriteFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_storage() -> (FileStorage, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FileStorage::new(temp_dir.path()).expect("Failed to create storage");
        (storage, temp_dir)
    }

    #[test]
    fn test_missing_key_reads_as_none() {
        let (storage, _temp_dir) = setup_test_storage();
        assert_eq!(storage.get_item("symptomReports").unwrap(), None);
    }

    #[test]
    fn test_set_then_get_survives_new_instance() {
        let (storage, temp_dir) = setup_test_storage();
        storage.set_item("healthwatch-language", "bn").unwrap();

        let reopened = FileStorage::new(temp_dir.path()).unwrap();
        assert_eq!(
            reopened.get_item("healthwatch-language").unwrap(),
            Some("bn".to_string())
        );
        assert!(!temp_dir.path().join("healthwatch-language.tmp").exists());
    }

    #[test]
    fn test_remove_item_is_idempotent() {
        let (storage, _temp_dir) = setup_test_storage();
        storage.set_item("theme", "dark").unwrap();

        storage.remove_item("theme").unwrap();
        storage.remove_item("theme").unwrap();
        assert_eq!(storage.get_item("theme").unwrap(), None);
    }

    #[test]
    fn test_creates_missing_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        let storage = FileStorage::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(storage.base_directory(), nested.as_path());
    }

    #[test]
    fn test_safe_file_name() {
        assert_eq!(FileStorage::safe_file_name("symptomReports"), "symptomReports.value");
        assert_eq!(FileStorage::safe_file_name("healthwatch-language"), "healthwatch-language.value");
        assert_eq!(
            FileStorage::safe_file_name("../etc/passwd"),
            "_2E_2E_2Fetc_2Fpasswd.value"
        );
    }

    #[test]
    fn test_similar_keys_do_not_share_a_file() {
        assert_ne!(FileStorage::safe_file_name("a.b"), FileStorage::safe_file_name("a_b"));
        assert_ne!(FileStorage::safe_file_name("a_2Eb"), FileStorage::safe_file_name("a.b"));

        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path()).unwrap();
        storage.set_item("a.b", "dot").unwrap();
        storage.set_item("a_b", "underscore").unwrap();

        assert_eq!(storage.get_item("a.b").unwrap(), Some("dot".to_string()));
        assert_eq!(storage.get_item("a_b").unwrap(), Some("underscore".to_string()));
    }
}
