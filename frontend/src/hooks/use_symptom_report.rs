use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use gloo::timers::future::TimeoutFuture;
use healthwatch_backend::{IntakeConfig, SubmissionController, SubmitError, SymptomReportRepository};
use log::Level;
use shared::{FieldErrors, SubmissionStatus, Symptom, SymptomReport, SymptomReportForm};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::local_storage::BrowserStorage;
use crate::services::logging::Logger;

type Controller = SubmissionController<SymptomReportRepository<BrowserStorage>>;

#[derive(Clone, PartialEq)]
pub struct SymptomReportState {
    pub form: SymptomReportForm,
    pub field_errors: FieldErrors,
    pub status: SubmissionStatus,
}

impl SymptomReportState {
    fn snapshot(controller: &Controller) -> Self {
        Self {
            form: controller.form().clone(),
            field_errors: controller.field_errors().clone(),
            status: controller.status(),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseSymptomReportActions {
    pub on_patient_name_change: Callback<String>,
    pub on_age_change: Callback<String>,
    pub on_village_change: Callback<String>,
    pub on_contact_number_change: Callback<String>,
    pub on_additional_notes_change: Callback<String>,
    pub on_symptom_toggle: Callback<(Symptom, bool)>,
    pub submit: Callback<()>,
}

pub struct UseSymptomReportResult {
    pub state: SymptomReportState,
    pub actions: UseSymptomReportActions,
}

/// Log line for a finished submission. Storage failures are errors;
/// a late completion after the status moved on is only noise.
fn describe_outcome(outcome: &Result<SymptomReport, SubmitError>) -> (Level, String) {
    match outcome {
        Ok(report) => (Level::Info, format!("Report {} saved", report.id)),
        Err(e @ SubmitError::Storage(_)) => (Level::Error, e.to_string()),
        Err(e) => (Level::Debug, e.to_string()),
    }
}

fn log_outcome(outcome: &Result<SymptomReport, SubmitError>) {
    let (level, message) = describe_outcome(outcome);
    match level {
        Level::Error => Logger::error_with_component("symptom_report", &message),
        Level::Info => Logger::info_with_component("symptom_report", &message),
        _ => Logger::debug_with_component("symptom_report", &message),
    }
}

/// Return the banner to idle once the display window has passed
fn schedule_tick(controller: Rc<RefCell<Controller>>, force: UseForceUpdateHandle, delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if controller.borrow_mut().tick(Utc::now()) {
            force.force_update();
        }
    });
}

fn edit<F>(controller: &Rc<RefCell<Controller>>, force: &UseForceUpdateHandle, apply: F) -> Callback<String>
where
    F: Fn(&mut Controller, String) + 'static,
{
    let controller = controller.clone();
    let force = force.clone();
    Callback::from(move |value: String| {
        apply(&mut controller.borrow_mut(), value);
        force.force_update();
    })
}

#[hook]
pub fn use_symptom_report(config: &IntakeConfig) -> UseSymptomReportResult {
    let controller = {
        let config = config.clone();
        use_mut_ref(move || {
            let repository = SymptomReportRepository::new(BrowserStorage, config.reports_key.clone());
            SubmissionController::from_config(repository, &config)
        })
    };
    let force = use_force_update();
    let display_ms = u32::try_from(config.status_display_ms).unwrap_or(u32::MAX);

    let on_symptom_toggle = {
        let controller = controller.clone();
        let force = force.clone();
        Callback::from(move |(symptom, checked): (Symptom, bool)| {
            controller.borrow_mut().toggle_symptom(symptom, checked);
            force.force_update();
        })
    };

    let submit = {
        let controller = controller.clone();
        let force = force.clone();
        Callback::from(move |_| {
            let started = controller.borrow_mut().begin_submit(Utc::now());
            force.force_update();

            match started {
                Err(SubmitError::Busy) => {}
                Err(_) => schedule_tick(controller.clone(), force.clone(), display_ms),
                Ok(report) => {
                    let controller = controller.clone();
                    let force = force.clone();
                    spawn_local(async move {
                        // Let the disabled submit button paint before writing
                        TimeoutFuture::new(0).await;

                        let outcome = controller.borrow().storage().append_at(report, Utc::now());
                        let completed = controller.borrow_mut().complete_submit(outcome, Utc::now());
                        log_outcome(&completed);
                        force.force_update();
                        schedule_tick(controller, force, display_ms);
                    });
                }
            }
        })
    };

    let actions = UseSymptomReportActions {
        on_patient_name_change: edit(&controller, &force, |c, v| c.set_patient_name(v)),
        on_age_change: edit(&controller, &force, |c, v| c.set_age_input(v)),
        on_village_change: edit(&controller, &force, |c, v| c.set_village(v)),
        on_contact_number_change: edit(&controller, &force, |c, v| c.set_contact_number(v)),
        on_additional_notes_change: edit(&controller, &force, |c, v| c.set_additional_notes(v)),
        on_symptom_toggle,
        submit,
    };

    let state = SymptomReportState::snapshot(&controller.borrow());
    UseSymptomReportResult { state, actions }
}
