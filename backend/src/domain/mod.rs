//! # Domain Module
//!
//! Contains the business logic of the symptom intake flow, independent of
//! any UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **models**: Validated report payload and report id allocation
//! - **report_validation**: Field rules for the symptom report form
//! - **submission_service**: Draft form state and the submit lifecycle
//! - **localization**: Translation tables and `t(key)` lookup
//! - **preferences**: Language and theme contexts
//! - **image_analysis**: Colour-statistics demo behind the AI detection card
//!
//! ## Business Rules
//!
//! - A report is only stored once every field passes validation
//! - Stored reports are never modified or deleted by this crate
//! - Newest reports come first and ids are unique per store
//! - Missing translations fall back to the key, never to an empty label

pub mod image_analysis;
pub mod localization;
pub mod models;
pub mod preferences;
pub mod report_validation;
pub mod submission_service;

pub use image_analysis::{analyze_image, classify, CannedResult, PixelStats};
pub use localization::Translations;
pub use models::ValidatedReport;
pub use preferences::{LanguageContext, ThemeContext};
pub use report_validation::ReportValidator;
pub use submission_service::{SubmissionController, SubmitError};
