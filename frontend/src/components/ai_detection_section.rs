use chrono::Utc;
use gloo::file::callbacks::{read_as_bytes, FileReader};
use gloo::file::File;
use healthwatch_backend::analyze_image;
use shared::AnalysisReport;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_preferences::use_translator;
use crate::services::logging::Logger;

fn list(title: &str, items: &[String]) -> Html {
    html! {
        <div class="analysis-list">
            <h4>{title}</h4>
            <ul>
                {for items.iter().map(|item| html! { <li>{item}</li> })}
            </ul>
        </div>
    }
}

fn result_card(report: &AnalysisReport) -> Html {
    html! {
        <div class="analysis-result">
            <div class="analysis-meta">
                <p>{format!("Analysis ID: {}", report.analysis_id)}</p>
                <p>{format!("Completed: {}", report.timestamp)}</p>
                <p>{format!("Image: {}", report.image_size)}</p>
            </div>
            <h3>{&report.name}</h3>
            <p class="analysis-confidence">
                {format!("Confidence Level: {}% · Severity: {}", report.confidence, report.severity)}
            </p>
            {list("Detected Symptoms", &report.symptoms)}
            {list("Possible Causes", &report.possible_causes)}
            {list("Prevention", &report.prevention)}
            {list("Recommendations", &report.recommendations)}
        </div>
    }
}

#[function_component(AiDetectionSection)]
pub fn ai_detection_section() -> Html {
    let translator = use_translator();
    let selected_file = use_state(|| Option::<File>::None);
    let analyzing = use_state(|| false);
    let result = use_state(|| Option::<AnalysisReport>::None);
    let error = use_state(|| Option::<String>::None);
    // Dropping a FileReader cancels the read
    let reader = use_mut_ref(|| Option::<FileReader>::None);

    let on_file_change = {
        let selected_file = selected_file.clone();
        let result = result.clone();
        let error = error.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            let file = input.files().and_then(|files| files.get(0)).map(File::from);
            result.set(None);
            error.set(None);
            selected_file.set(file);
        })
    };

    let on_analyze = {
        let selected_file = selected_file.clone();
        let analyzing = analyzing.clone();
        let result = result.clone();
        let error = error.clone();
        let reader = reader.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(file) = (*selected_file).clone() else {
                return;
            };
            analyzing.set(true);
            error.set(None);

            let analyzing = analyzing.clone();
            let result = result.clone();
            let error = error.clone();
            let task = read_as_bytes(&file, move |bytes| {
                let outcome = bytes
                    .map_err(|e| anyhow::anyhow!("Could not read file: {:?}", e))
                    .and_then(|bytes| analyze_image(&bytes, Utc::now()));
                match outcome {
                    Ok(report) => result.set(Some(report)),
                    Err(e) => {
                        Logger::warn_with_component("ai_detection", &format!("{:#}", e));
                        error.set(Some(format!("{:#}", e)));
                    }
                }
                analyzing.set(false);
            });
            *reader.borrow_mut() = Some(task);
        })
    };

    let on_reset = {
        let selected_file = selected_file.clone();
        let result = result.clone();
        let error = error.clone();
        let reader = reader.clone();
        Callback::from(move |_: MouseEvent| {
            reader.borrow_mut().take();
            selected_file.set(None);
            result.set(None);
            error.set(None);
        })
    };

    html! {
        <section id="ai-detection" class="ai-detection-section">
            <div class="container">
                <div class="section-header">
                    <span class="badge">{"🧠 AI-Powered Detection"}</span>
                    <h2>{translator.t_or("aiDetection.title", "Smart Disease Detection System")}</h2>
                    <p>
                        {"Upload an image to see an illustrative analysis. "}
                        {"This demo is not a diagnosis; consult a health worker for any concern."}
                    </p>
                </div>

                <div class="ai-grid">
                    <div class="card upload-card">
                        <h3>{"📷 Image Upload"}</h3>
                        <p class="card-description">{"Supported formats: JPG, PNG, GIF, WebP"}</p>
                        <input type="file" accept="image/*" onchange={on_file_change} />

                        {if let Some(file) = selected_file.as_ref() {
                            html! {
                                <div class="selected-file">
                                    <p>{file.name()}</p>
                                    <p class="muted">{format!("{:.2} MB", file.size() as f64 / 1024.0 / 1024.0)}</p>
                                    <button class="btn btn-primary" onclick={on_analyze} disabled={*analyzing}>
                                        {if *analyzing { "Analyzing..." } else { "Analyze Image" }}
                                    </button>
                                    <button class="btn btn-outline" onclick={on_reset}>{"Reset"}</button>
                                </div>
                            }
                        } else { html! {} }}

                        {if let Some(message) = error.as_ref() {
                            html! { <div class="form-message error">{message}</div> }
                        } else { html! {} }}
                    </div>

                    <div class="card result-card">
                        {match result.as_ref() {
                            Some(report) => result_card(report),
                            None => html! {
                                <p class="muted">{"Upload your image to see the analysis"}</p>
                            },
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}
