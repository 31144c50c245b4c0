use healthwatch_backend::IntakeConfig;
use shared::{FailureReason, SubmissionStatus};
use yew::prelude::*;

use super::forms::symptom_report_form::{SymptomFormLabels, SymptomReportForm};
use crate::hooks::use_preferences::{use_translator, Translator};
use crate::hooks::use_symptom_report::use_symptom_report;

#[derive(Properties, PartialEq)]
pub struct SymptomReportSectionProps {
    pub config: IntakeConfig,
}

fn labels(translator: &Translator) -> SymptomFormLabels {
    let t = |key: &str, default: &str| translator.t_or(&format!("symptoms.{}", key), default);
    SymptomFormLabels {
        patient_info: t("patientInfo", "Patient Information"),
        patient_name: t("patientName", "Patient Name"),
        patient_name_placeholder: t("patientNamePlaceholder", "Enter patient name"),
        age: t("age", "Age"),
        age_placeholder: t("agePlaceholder", "Age"),
        village: t("village", "Village"),
        village_placeholder: t("villagePlaceholder", "Select village"),
        contact_number: t("contactNumber", "Contact Number"),
        contact_number_placeholder: t("contactNumberPlaceholder", "Phone number"),
        symptoms_title: t("symptomsTitle", "Symptoms (check all that apply)"),
        additional_notes: t("additionalNotes", "Additional Notes"),
        additional_notes_placeholder: t(
            "additionalNotesPlaceholder",
            "Any additional observations or notes...",
        ),
        submit_button: t("submitButton", "Submit Report"),
        submitting: t("submitting", "Submitting..."),
        success_message: t("successMessage", "Symptom report submitted successfully!"),
        error_message: t("errorMessage", "Error submitting report. Please try again."),
    }
}

#[function_component(SymptomReportSection)]
pub fn symptom_report_section(props: &SymptomReportSectionProps) -> Html {
    let translator = use_translator();
    let report = use_symptom_report(&props.config);
    let state = &report.state;
    let actions = &report.actions;

    html! {
        <section id="symptoms" class="symptom-report-section">
            <div class="container">
                <div class="card">
                    <div class="card-header">
                        <h2>{"🌡️ "}{translator.t_or("symptoms.title", "Symptom Report")}</h2>
                        <p class="card-description">
                            {translator.t_or(
                                "symptoms.subtitle",
                                "Record patient symptoms and basic health indicators.",
                            )}
                        </p>
                    </div>
                    <SymptomReportForm
                        values={state.form.clone()}
                        field_errors={state.field_errors.clone()}
                        submitting={state.status == SubmissionStatus::Submitting}
                        submit_success={state.status == SubmissionStatus::Succeeded}
                        submit_error={state.status == SubmissionStatus::Failed(FailureReason::Storage)}
                        labels={labels(&translator)}
                        on_patient_name_change={actions.on_patient_name_change.clone()}
                        on_age_change={actions.on_age_change.clone()}
                        on_village_change={actions.on_village_change.clone()}
                        on_contact_number_change={actions.on_contact_number_change.clone()}
                        on_additional_notes_change={actions.on_additional_notes_change.clone()}
                        on_symptom_toggle={actions.on_symptom_toggle.clone()}
                        on_submit={actions.submit.clone()}
                    />
                </div>
            </div>
        </section>
    }
}
