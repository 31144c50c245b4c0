pub mod symptom_report;

pub use symptom_report::ValidatedReport;
