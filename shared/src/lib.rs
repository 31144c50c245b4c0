use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A submitted symptom report, as persisted in local storage.
///
/// Field names serialize in camelCase so the stored JSON array stays
/// readable by any client of the same storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomReport {
    /// Epoch-millisecond id, unique among stored reports
    pub id: String,
    pub patient_name: String,
    /// Age in whole years (0-150)
    pub age: u8,
    pub village: Village,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
    /// Selected symptoms in the order they were checked (never empty)
    pub symptoms: Vec<Symptom>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    /// Submission timestamp (RFC 3339, UTC)
    pub created_at: DateTime<Utc>,
}

impl SymptomReport {
    /// Generate report ID from a submission timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        epoch_millis.to_string()
    }

    /// Parse report ID back into its epoch-millisecond value
    pub fn parse_id(id: &str) -> Result<u64, ReportIdError> {
        if id.is_empty() {
            return Err(ReportIdError::Empty);
        }
        id.parse::<u64>().map_err(|_| ReportIdError::NotNumeric)
    }

    /// Extract epoch timestamp from report ID for ordering
    pub fn extract_timestamp(&self) -> Result<u64, ReportIdError> {
        Self::parse_id(&self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportIdError {
    Empty,
    NotNumeric,
}

impl fmt::Display for ReportIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportIdError::Empty => write!(f, "Report ID is empty"),
            ReportIdError::NotNumeric => write!(f, "Report ID is not an epoch timestamp"),
        }
    }
}

impl std::error::Error for ReportIdError {}

/// Symptom catalog offered on the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Fever,
    Dehydration,
    Fatigue,
    Diarrhea,
    AbdominalPain,
    Headache,
    Vomiting,
    Nausea,
}

impl Symptom {
    /// Catalog order, as rendered on the form
    pub const ALL: [Symptom; 8] = [
        Symptom::Fever,
        Symptom::Dehydration,
        Symptom::Fatigue,
        Symptom::Diarrhea,
        Symptom::AbdominalPain,
        Symptom::Headache,
        Symptom::Vomiting,
        Symptom::Nausea,
    ];

    /// Stable identifier used in storage and checkbox ids
    pub fn id(&self) -> &'static str {
        match self {
            Symptom::Fever => "fever",
            Symptom::Dehydration => "dehydration",
            Symptom::Fatigue => "fatigue",
            Symptom::Diarrhea => "diarrhea",
            Symptom::AbdominalPain => "abdominal_pain",
            Symptom::Headache => "headache",
            Symptom::Vomiting => "vomiting",
            Symptom::Nausea => "nausea",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Symptom::Fever => "Fever",
            Symptom::Dehydration => "Dehydration",
            Symptom::Fatigue => "Fatigue",
            Symptom::Diarrhea => "Diarrhea",
            Symptom::AbdominalPain => "Abdominal pain",
            Symptom::Headache => "Headache",
            Symptom::Vomiting => "Vomiting",
            Symptom::Nausea => "Nausea",
        }
    }

    pub fn from_id(id: &str) -> Option<Symptom> {
        Self::ALL.iter().copied().find(|s| s.id() == id)
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Villages selectable on the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Village {
    Barpeta,
    Dhubri,
    Dibrugarh,
    Dispur,
    Goalpara,
    Jorhat,
    Nagaon,
    Sivasagar,
    Tezpur,
    Tinsukia,
}

impl Village {
    pub const ALL: [Village; 10] = [
        Village::Barpeta,
        Village::Dhubri,
        Village::Dibrugarh,
        Village::Dispur,
        Village::Goalpara,
        Village::Jorhat,
        Village::Nagaon,
        Village::Sivasagar,
        Village::Tezpur,
        Village::Tinsukia,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Village::Barpeta => "Barpeta",
            Village::Dhubri => "Dhubri",
            Village::Dibrugarh => "Dibrugarh",
            Village::Dispur => "Dispur",
            Village::Goalpara => "Goalpara",
            Village::Jorhat => "Jorhat",
            Village::Nagaon => "Nagaon",
            Village::Sivasagar => "Sivasagar",
            Village::Tezpur => "Tezpur",
            Village::Tinsukia => "Tinsukia",
        }
    }

    pub fn from_name(name: &str) -> Option<Village> {
        Self::ALL.iter().copied().find(|v| v.name() == name)
    }
}

impl fmt::Display for Village {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw, unvalidated values as entered on the symptom report form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomReportForm {
    pub patient_name: String,
    /// Raw text of the number input; empty when nothing was typed
    pub age: String,
    /// Selected village name; empty when nothing was selected
    pub village: String,
    pub contact_number: String,
    /// Checked symptom identifiers, in check order
    pub symptoms: Vec<String>,
    pub additional_notes: String,
}

/// Form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportField {
    PatientName,
    Age,
    Village,
    ContactNumber,
    Symptoms,
    AdditionalNotes,
}

impl ReportField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportField::PatientName => "patientName",
            ReportField::Age => "age",
            ReportField::Village => "village",
            ReportField::ContactNumber => "contactNumber",
            ReportField::Symptoms => "symptoms",
            ReportField::AdditionalNotes => "additionalNotes",
        }
    }
}

impl fmt::Display for ReportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field-level validation messages, one per offending field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<ReportField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for a field. The first message for a field wins.
    pub fn insert(&mut self, field: ReportField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Drop the message for a field, typically once the user edits it
    pub fn remove(&mut self, field: ReportField) {
        self.0.remove(&field);
    }

    pub fn get(&self, field: ReportField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: ReportField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> Vec<ReportField> {
        self.0.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ReportField, &String)> {
        self.0.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Why the last submission ended in the failed state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// One or more fields were rejected; nothing was written
    Validation,
    /// The store rejected the write; the draft is kept for retry
    Storage,
}

/// Lifecycle of the submit control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(FailureReason),
}

/// Languages offered by the language switcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "as")]
    Assamese,
    #[serde(rename = "bn")]
    Bengali,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Hindi,
        Language::Assamese,
        Language::Bengali,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Assamese => "as",
            Language::Bengali => "bn",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Assamese => "অসমীয়া",
            Language::Bengali => "বাংলা",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::English => "🇺🇸",
            _ => "🇮🇳",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Self::ALL.iter().copied().find(|l| l.code() == code)
    }
}

/// Colour scheme chosen by the theme toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn from_string(value: &str) -> Option<ThemePreference> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            "system" => Some(ThemePreference::System),
            _ => None,
        }
    }
}

/// Result card shown by the image analysis demo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub name: String,
    /// Illustrative confidence percentage
    pub confidence: u8,
    pub severity: String,
    pub symptoms: Vec<String>,
    pub prevention: Vec<String>,
    pub recommendations: Vec<String>,
    pub possible_causes: Vec<String>,
    /// "AI-<epoch millis>"
    pub analysis_id: String,
    pub timestamp: String,
    /// "<width>x<height>"
    pub image_size: String,
}
