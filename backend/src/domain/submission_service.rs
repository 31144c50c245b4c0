//! Symptom report submission lifecycle.
//!
//! [`SubmissionController`] owns the draft form and the state of the submit
//! control, and drives one submission at a time through validation and a
//! single store write.
//!
//! ```text
//!            submit (valid)           write ok
//!   Idle ─────────────────────▶ Submitting ───────▶ Succeeded ──┐
//!    ▲  │                            │                          │
//!    │  │ submit (invalid)           │ write failed             │ display
//!    │  └──────────────▶ Failed ◀────┘                          │ window
//!    │                     │                                    │ elapsed
//!    └─────────────────────┴────────────────────────────────────┘
//! ```
//!
//! ## Business Rules
//!
//! - Submissions start from `Idle`. A submit while a result is still on
//!   display dismisses it first; a submit while `Submitting` is rejected
//! - Invalid input never reaches the store
//! - Exactly one store write per accepted submission
//! - Success clears the draft unless it was edited while the write was in
//!   flight; failure keeps it for retry
//! - `Succeeded` and `Failed` fall back to `Idle` once the display window
//!   has elapsed, as observed by [`SubmissionController::tick`]

use chrono::{DateTime, Duration, Utc};
use log::{error, info, warn};
use shared::{
    FailureReason, FieldErrors, ReportField, SubmissionStatus, Symptom, SymptomReport,
    SymptomReportForm,
};

use crate::config::IntakeConfig;
use crate::domain::models::ValidatedReport;
use crate::domain::report_validation::ReportValidator;
use crate::storage::{ReportStorage, StorageError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("A submission is already in progress")]
    Busy,
    #[error("No submission is in progress")]
    NotSubmitting,
    #[error("Symptom report is invalid: {0}")]
    Validation(FieldErrors),
    #[error("Symptom report could not be saved: {0}")]
    Storage(#[from] StorageError),
}

pub struct SubmissionController<S: ReportStorage> {
    storage: S,
    validator: ReportValidator,
    display_window: Duration,
    form: SymptomReportForm,
    field_errors: FieldErrors,
    status: SubmissionStatus,
    status_since: Option<DateTime<Utc>>,
    last_report: Option<SymptomReport>,
    /// The draft as it was when the in-flight submission began
    in_flight: Option<SymptomReportForm>,
}

impl<S: ReportStorage> SubmissionController<S> {
    pub fn new(storage: S, display_window: Duration) -> Self {
        Self {
            storage,
            validator: ReportValidator::new(),
            display_window,
            form: SymptomReportForm::default(),
            field_errors: FieldErrors::new(),
            status: SubmissionStatus::Idle,
            status_since: None,
            last_report: None,
            in_flight: None,
        }
    }

    pub fn from_config(storage: S, config: &IntakeConfig) -> Self {
        Self::new(storage, config.status_display_window())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ---- draft form ----------------------------------------------------

    pub fn form(&self) -> &SymptomReportForm {
        &self.form
    }

    pub fn set_patient_name(&mut self, value: impl Into<String>) {
        self.form.patient_name = value.into();
        self.field_errors.remove(ReportField::PatientName);
    }

    pub fn set_age_input(&mut self, value: impl Into<String>) {
        self.form.age = value.into();
        self.field_errors.remove(ReportField::Age);
    }

    pub fn set_village(&mut self, value: impl Into<String>) {
        self.form.village = value.into();
        self.field_errors.remove(ReportField::Village);
    }

    pub fn set_contact_number(&mut self, value: impl Into<String>) {
        self.form.contact_number = value.into();
    }

    pub fn set_additional_notes(&mut self, value: impl Into<String>) {
        self.form.additional_notes = value.into();
    }

    /// Check or uncheck a symptom. Checking keeps selection order and never
    /// adds a symptom twice.
    pub fn toggle_symptom(&mut self, symptom: Symptom, checked: bool) {
        let id = symptom.id();
        if checked {
            if !self.form.symptoms.iter().any(|s| s == id) {
                self.form.symptoms.push(id.to_string());
            }
        } else {
            self.form.symptoms.retain(|s| s != id);
        }
        self.field_errors.remove(ReportField::Symptoms);
    }

    pub fn is_symptom_checked(&self, symptom: Symptom) -> bool {
        self.form.symptoms.iter().any(|s| s == symptom.id())
    }

    pub fn checked_symptoms(&self) -> Vec<Symptom> {
        self.form
            .symptoms
            .iter()
            .filter_map(|id| Symptom::from_id(id))
            .collect()
    }

    // ---- status --------------------------------------------------------

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn submit_succeeded(&self) -> bool {
        self.status == SubmissionStatus::Succeeded
    }

    /// True only for a failed store write; validation failures are shown
    /// inline through [`Self::field_errors`]
    pub fn submit_failed(&self) -> bool {
        self.status == SubmissionStatus::Failed(FailureReason::Storage)
    }

    /// The submit control is only disabled while a write is in flight
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn field_error(&self, field: ReportField) -> Option<&str> {
        self.field_errors.get(field)
    }

    /// The report stored by the last successful submission
    pub fn last_report(&self) -> Option<&SymptomReport> {
        self.last_report.as_ref()
    }

    /// When the current success/failure display ends, if one is showing
    pub fn status_expires_at(&self) -> Option<DateTime<Utc>> {
        match self.status {
            SubmissionStatus::Succeeded | SubmissionStatus::Failed(_) => {
                self.status_since.map(|since| since + self.display_window)
            }
            _ => None,
        }
    }

    /// Return to `Idle` once the display window has elapsed.
    /// Returns true when the status changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        match self.status_expires_at() {
            Some(expires_at) if now >= expires_at => {
                self.enter(SubmissionStatus::Idle, now);
                true
            }
            _ => false,
        }
    }

    // ---- submission ----------------------------------------------------

    /// Validate the draft and, when valid, move to `Submitting`.
    ///
    /// The caller must write the returned report to the store and hand the
    /// outcome to [`Self::complete_submit`].
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Result<ValidatedReport, SubmitError> {
        if self.is_submitting() {
            warn!("⚠️ Submit ignored while a submission is in flight");
            return Err(SubmitError::Busy);
        }
        if self.status != SubmissionStatus::Idle {
            // A new attempt dismisses the result still on display
            self.enter(SubmissionStatus::Idle, now);
        }

        match self.validator.validate(&self.form) {
            Ok(report) => {
                self.field_errors = FieldErrors::new();
                self.in_flight = Some(self.form.clone());
                self.enter(SubmissionStatus::Submitting, now);
                Ok(report)
            }
            Err(errors) => {
                info!("Symptom report has {} invalid field(s)", errors.len());
                self.field_errors = errors.clone();
                self.enter(SubmissionStatus::Failed(FailureReason::Validation), now);
                Err(SubmitError::Validation(errors))
            }
        }
    }

    /// Record the outcome of the store write started by [`Self::begin_submit`]
    pub fn complete_submit(
        &mut self,
        outcome: Result<SymptomReport, StorageError>,
        now: DateTime<Utc>,
    ) -> Result<SymptomReport, SubmitError> {
        if !self.is_submitting() {
            return Err(SubmitError::NotSubmitting);
        }

        let submitted = self.in_flight.take();
        match outcome {
            Ok(report) => {
                info!("✅ Symptom report {} submitted", report.id);
                // Edits made while the write was in flight belong to the next report
                if submitted.as_ref() == Some(&self.form) {
                    self.form = SymptomReportForm::default();
                } else {
                    info!("Draft changed during submission, keeping it");
                }
                self.field_errors = FieldErrors::new();
                self.last_report = Some(report.clone());
                self.enter(SubmissionStatus::Succeeded, now);
                Ok(report)
            }
            Err(e) => {
                error!("❌ Error submitting symptom report: {}", e);
                self.enter(SubmissionStatus::Failed(FailureReason::Storage), now);
                Err(SubmitError::Storage(e))
            }
        }
    }

    /// Validate, store and record the outcome in one go.
    ///
    /// `now` stamps both transitions; the store stamps the report itself.
    pub async fn submit(&mut self, now: DateTime<Utc>) -> Result<SymptomReport, SubmitError> {
        let report = self.begin_submit(now)?;
        let outcome = self.storage.append(report).await;
        self.complete_submit(outcome, now)
    }

    fn enter(&mut self, status: SubmissionStatus, now: DateTime<Utc>) {
        self.status = status;
        self.status_since = match status {
            SubmissionStatus::Idle => None,
            _ => Some(now),
        };
    }
}
