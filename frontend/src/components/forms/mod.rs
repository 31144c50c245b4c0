pub mod symptom_report_form;

pub use symptom_report_form::SymptomReportForm;
