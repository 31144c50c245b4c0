pub mod use_preferences;
pub mod use_symptom_report;
