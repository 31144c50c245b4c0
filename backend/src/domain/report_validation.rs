//! Symptom report form validation.
//!
//! Turns the raw strings of a [`SymptomReportForm`] into a typed
//! [`ValidatedReport`], or into per-field messages for inline display.
//! Validation is pure and never fails in any other way.
//!
//! ## Rules
//!
//! - Patient name: at least one non-blank character
//! - Age: a whole number between 0 and 150
//! - Village: selected, and one of the known villages
//! - Symptoms: at least one, each from the catalog
//! - Contact number and additional notes: free text, blank means absent

use log::debug;
use shared::{FieldErrors, ReportField, Symptom, SymptomReportForm, Village};

use crate::domain::models::ValidatedReport;

pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 150;

pub const PATIENT_NAME_REQUIRED: &str = "Patient name is required";
pub const AGE_REQUIRED: &str = "Age is required";
pub const AGE_NOT_WHOLE_NUMBER: &str = "Age must be a whole number";
pub const AGE_OUT_OF_RANGE: &str = "Age must be between 0 and 150";
pub const VILLAGE_REQUIRED: &str = "Village is required";
pub const VILLAGE_UNKNOWN: &str = "Unknown village";
pub const SYMPTOMS_REQUIRED: &str = "At least one symptom must be selected";

#[derive(Clone, Default)]
pub struct ReportValidator;

impl ReportValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate the whole form, collecting one message per offending field
    pub fn validate(&self, form: &SymptomReportForm) -> Result<ValidatedReport, FieldErrors> {
        let mut errors = FieldErrors::new();

        let patient_name = form.patient_name.trim();
        if patient_name.is_empty() {
            errors.insert(ReportField::PatientName, PATIENT_NAME_REQUIRED);
        }

        let age = match self.parse_age(&form.age) {
            Ok(age) => Some(age),
            Err(message) => {
                errors.insert(ReportField::Age, message);
                None
            }
        };

        let village = match self.parse_village(&form.village) {
            Ok(village) => Some(village),
            Err(message) => {
                errors.insert(ReportField::Village, message);
                None
            }
        };

        let symptoms = match self.parse_symptoms(&form.symptoms) {
            Ok(symptoms) => symptoms,
            Err(message) => {
                errors.insert(ReportField::Symptoms, message);
                Vec::new()
            }
        };

        match (age, village) {
            (Some(age), Some(village)) if errors.is_empty() => Ok(ValidatedReport {
                patient_name: patient_name.to_string(),
                age,
                village,
                contact_number: optional_text(&form.contact_number),
                symptoms,
                additional_notes: optional_text(&form.additional_notes),
            }),
            _ => {
                debug!("Symptom report rejected: {}", errors);
                Err(errors)
            }
        }
    }

    /// Parse the raw age input. Accepts integral values written as decimals
    /// ("34.0"), since number inputs may produce them.
    pub fn parse_age(&self, input: &str) -> Result<u8, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AGE_REQUIRED.to_string());
        }

        let value = match trimmed.parse::<i64>() {
            Ok(value) => value,
            Err(_) => match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() && value.fract() == 0.0 => value as i64,
                _ => return Err(AGE_NOT_WHOLE_NUMBER.to_string()),
            },
        };

        if !(MIN_AGE..=MAX_AGE).contains(&value) {
            return Err(AGE_OUT_OF_RANGE.to_string());
        }
        u8::try_from(value).map_err(|_| AGE_OUT_OF_RANGE.to_string())
    }

    pub fn parse_village(&self, input: &str) -> Result<Village, String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(VILLAGE_REQUIRED.to_string());
        }
        Village::from_name(trimmed).ok_or_else(|| VILLAGE_UNKNOWN.to_string())
    }

    /// Parse checked symptom ids, keeping check order and dropping repeats
    pub fn parse_symptoms(&self, ids: &[String]) -> Result<Vec<Symptom>, String> {
        if ids.is_empty() {
            return Err(SYMPTOMS_REQUIRED.to_string());
        }

        let mut symptoms = Vec::with_capacity(ids.len());
        for id in ids {
            let symptom = Symptom::from_id(id).ok_or_else(|| format!("Unknown symptom: {}", id))?;
            if !symptoms.contains(&symptom) {
                symptoms.push(symptom);
            }
        }
        Ok(symptoms)
    }
}

fn optional_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
