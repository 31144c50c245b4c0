use shared::{FieldErrors, ReportField, Symptom, SymptomReportForm as FormValues, Village};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Label and placeholder text, already translated
#[derive(Clone, PartialEq)]
pub struct SymptomFormLabels {
    pub patient_info: String,
    pub patient_name: String,
    pub patient_name_placeholder: String,
    pub age: String,
    pub age_placeholder: String,
    pub village: String,
    pub village_placeholder: String,
    pub contact_number: String,
    pub contact_number_placeholder: String,
    pub symptoms_title: String,
    pub additional_notes: String,
    pub additional_notes_placeholder: String,
    pub submit_button: String,
    pub submitting: String,
    pub success_message: String,
    pub error_message: String,
}

#[derive(Properties, PartialEq)]
pub struct SymptomReportFormProps {
    // Form state
    pub values: FormValues,
    pub field_errors: FieldErrors,
    pub submitting: bool,
    pub submit_success: bool,
    pub submit_error: bool,
    pub labels: SymptomFormLabels,

    // Event handlers
    pub on_patient_name_change: Callback<String>,
    pub on_age_change: Callback<String>,
    pub on_village_change: Callback<String>,
    pub on_contact_number_change: Callback<String>,
    pub on_additional_notes_change: Callback<String>,
    pub on_symptom_toggle: Callback<(Symptom, bool)>,
    pub on_submit: Callback<()>,
}

fn input_value(callback: &Callback<String>) -> Callback<InputEvent> {
    let callback = callback.clone();
    Callback::from(move |e: InputEvent| {
        callback.emit(e.target_unchecked_into::<HtmlInputElement>().value());
    })
}

fn field_error(errors: &FieldErrors, field: ReportField) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    }
}

fn input_class(errors: &FieldErrors, field: ReportField) -> Classes {
    classes!("form-input", errors.contains(field).then_some("invalid"))
}

#[function_component(SymptomReportForm)]
pub fn symptom_report_form(props: &SymptomReportFormProps) -> Html {
    let labels = &props.labels;
    let errors = &props.field_errors;

    let on_village_change = {
        let callback = props.on_village_change.clone();
        Callback::from(move |e: Event| {
            callback.emit(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };

    let on_notes_input = {
        let callback = props.on_additional_notes_change.clone();
        Callback::from(move |e: InputEvent| {
            callback.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    html! {
        <form class="symptom-report-form" onsubmit={
            let on_submit = props.on_submit.clone();
            Callback::from(move |e: SubmitEvent| {
                e.prevent_default();
                on_submit.emit(());
            })
        }>
            {if props.submit_success {
                html! { <div class="form-message success">{"✅ "}{&labels.success_message}</div> }
            } else { html! {} }}

            {if props.submit_error {
                html! { <div class="form-message error">{"⚠️ "}{&labels.error_message}</div> }
            } else { html! {} }}

            <div class="form-section">
                <h3>{&labels.patient_info}</h3>

                <div class="form-row">
                    <div class="form-group">
                        <label for="patientName">{&labels.patient_name}</label>
                        <input
                            type="text"
                            id="patientName"
                            class={input_class(errors, ReportField::PatientName)}
                            placeholder={labels.patient_name_placeholder.clone()}
                            value={props.values.patient_name.clone()}
                            oninput={input_value(&props.on_patient_name_change)}
                            disabled={props.submitting}
                        />
                        {field_error(errors, ReportField::PatientName)}
                    </div>

                    <div class="form-group">
                        <label for="age">{&labels.age}</label>
                        <input
                            type="number"
                            id="age"
                            min="0"
                            max="150"
                            class={input_class(errors, ReportField::Age)}
                            placeholder={labels.age_placeholder.clone()}
                            value={props.values.age.clone()}
                            oninput={input_value(&props.on_age_change)}
                            disabled={props.submitting}
                        />
                        {field_error(errors, ReportField::Age)}
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="village">{&labels.village}</label>
                        <select
                            id="village"
                            class={input_class(errors, ReportField::Village)}
                            onchange={on_village_change}
                            disabled={props.submitting}
                        >
                            <option value="" selected={props.values.village.is_empty()} disabled=true>
                                {&labels.village_placeholder}
                            </option>
                            {for Village::ALL.iter().map(|village| html! {
                                <option
                                    value={village.name()}
                                    selected={props.values.village == village.name()}
                                >
                                    {village.name()}
                                </option>
                            })}
                        </select>
                        {field_error(errors, ReportField::Village)}
                    </div>

                    <div class="form-group">
                        <label for="contactNumber">{&labels.contact_number}</label>
                        <input
                            type="tel"
                            id="contactNumber"
                            class="form-input"
                            placeholder={labels.contact_number_placeholder.clone()}
                            value={props.values.contact_number.clone()}
                            oninput={input_value(&props.on_contact_number_change)}
                            disabled={props.submitting}
                        />
                    </div>
                </div>
            </div>

            <div class="form-section">
                <h3>{&labels.symptoms_title}</h3>
                <div class="symptom-grid">
                    {for Symptom::ALL.iter().map(|symptom| {
                        let symptom = *symptom;
                        let checked = props.values.symptoms.iter().any(|id| id == symptom.id());
                        let on_toggle = props.on_symptom_toggle.clone();
                        let submitting = props.submitting;
                        html! {
                            <label class="symptom-option" for={symptom.id()}>
                                <input
                                    type="checkbox"
                                    id={symptom.id()}
                                    {checked}
                                    disabled={submitting}
                                    onchange={Callback::from(move |e: Event| {
                                        let input = e.target_unchecked_into::<HtmlInputElement>();
                                        on_toggle.emit((symptom, input.checked()));
                                    })}
                                />
                                {symptom.label()}
                            </label>
                        }
                    })}
                </div>
                {field_error(errors, ReportField::Symptoms)}
            </div>

            <div class="form-group">
                <label for="additionalNotes">{&labels.additional_notes}</label>
                <textarea
                    id="additionalNotes"
                    class="form-input"
                    rows="4"
                    placeholder={labels.additional_notes_placeholder.clone()}
                    value={props.values.additional_notes.clone()}
                    oninput={on_notes_input}
                    disabled={props.submitting}
                />
            </div>

            <button
                type="submit"
                class="btn btn-primary submit-btn"
                disabled={props.submitting}
            >
                {if props.submitting {
                    labels.submitting.clone()
                } else {
                    labels.submit_button.clone()
                }}
            </button>
        </form>
    }
}
