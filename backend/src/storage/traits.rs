//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.
//!
//! Two seams exist:
//! - [`KeyValueStorage`] is the raw string-keyed store (browser `localStorage`,
//!   a data directory on disk, or memory in tests).
//! - [`ReportStorage`] is the symptom report log built on top of it.

use async_trait::async_trait;
use shared::SymptomReport;

use crate::domain::models::ValidatedReport;

/// Errors raised by a storage backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage quota exceeded: writing {attempted} bytes would exceed the {limit} byte limit")]
    QuotaExceeded { attempted: usize, limit: usize },
    #[error("Storage write failed for key '{key}': {reason}")]
    WriteFailed { key: String, reason: String },
    #[error("Storage read failed for key '{key}': {reason}")]
    ReadFailed { key: String, reason: String },
    #[error("Storage is unavailable: {0}")]
    Unavailable(String),
}

/// Trait defining a string key-value store with `localStorage` semantics
///
/// Values are opaque strings; serialization is the caller's concern.
/// Implementations must be cheap to call repeatedly and must never panic.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`, `None` when the key is absent
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Trait defining the interface for symptom report storage operations
///
/// The log is append-only: there is no update or delete.
#[async_trait]
pub trait ReportStorage: Send + Sync {
    /// List every readable stored report, newest first. Entries that do not
    /// match the report model are skipped; content that is not a JSON array
    /// is reported as an empty list.
    async fn load(&self) -> Vec<SymptomReport>;

    /// Attach a fresh id and timestamp to `report`, prepend it and persist
    /// the whole log. Returns the stored report.
    async fn append(&self, report: ValidatedReport) -> Result<SymptomReport, StorageError>;
}
