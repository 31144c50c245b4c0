//! # Storage Module
//!
//! Handles all data persistence for the symptom intake flow.
//!
//! Everything is built on [`KeyValueStorage`], a string-keyed store with
//! `localStorage` semantics. The browser build plugs in `window.localStorage`;
//! native builds and tests use [`FileStorage`] or [`MemoryStorage`].
//!
//! ## Layout
//!
//! - **traits**: `KeyValueStorage`, `ReportStorage` and `StorageError`
//! - **memory**: in-process store with an optional byte quota
//! - **file**: one file per key under a data directory
//! - **report_repository**: the append-only symptom report log
//! - **preference_repository**: saved language and theme

pub mod file;
pub mod memory;
pub mod preference_repository;
pub mod report_repository;
pub mod traits;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use preference_repository::PreferenceRepository;
pub use report_repository::SymptomReportRepository;
pub use traits::{KeyValueStorage, ReportStorage, StorageError};
