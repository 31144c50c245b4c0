pub mod ai_detection_section;
pub mod footer;
pub mod forms;
pub mod hero;
pub mod language_switcher;
pub mod navbar;
pub mod symptom_report_section;
pub mod theme_toggle;

pub use ai_detection_section::AiDetectionSection;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use symptom_report_section::SymptomReportSection;
