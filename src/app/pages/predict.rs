//! Prediction form page.

use dioxus::prelude::*;

use crate::app::api::{post_json, PredictionResponse, PREDICT_PATH};
use crate::app::components::{ErrorAlert, NumberField, SelectField};
use crate::app::form::{FormErrors, PredictionForm};
use crate::app::prediction_context::use_prediction;
use crate::app::Route;

const GENDER: &[(&str, &str)] = &[("1", "Male"), ("2", "Female")];
const LEVELS: &[(&str, &str)] = &[("1", "Normal"), ("2", "Above Normal"), ("3", "Well Above Normal")];
const YES_NO: &[(&str, &str)] = &[("0", "No"), ("1", "Yes")];

const SECTION_CLASS: &str = "bg-[#161b22] border border-[#30363d] rounded-2xl p-6 shadow-lg";
const SECTION_TITLE_CLASS: &str = "text-xl font-semibold border-b border-[#30363d] pb-3 mb-4";

#[component]
pub fn Predict() -> Element {
    let prediction = use_prediction();
    let navigator = use_navigator();

    let form = use_signal(PredictionForm::default);
    let mut errors = use_signal(FormErrors::new);
    let mut loading = use_signal(|| false);
    let mut failure = use_signal(|| None::<String>);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if loading() {
            return;
        }

        let request = match form.read().parse() {
            Ok(request) => request,
            Err(field_errors) => {
                tracing::debug!("Form rejected: {} invalid field(s)", field_errors.len());
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FormErrors::new());
        failure.set(None);
        // A failed request must not leave the previous result reachable
        prediction.clear();
        loading.set(true);

        spawn(async move {
            let result = post_json::<_, PredictionResponse>(PREDICT_PATH, &request).await;
            loading.set(false);
            match result {
                Ok(response) => {
                    tracing::info!(
                        "Prediction received: {} ({})",
                        response.probability_percent(),
                        response.risk_level.label()
                    );
                    prediction.store(response);
                    navigator.push(Route::Results {});
                }
                Err(e) => {
                    tracing::error!("Prediction request failed: {}", e);
                    failure.set(Some("Something went wrong!".to_string()));
                }
            }
        });
    };

    let field_error = move |name: &str| errors.read().get(name).cloned();

    let button_class = if loading() {
        "w-full md:w-1/2 bg-gray-500 cursor-not-allowed text-white font-semibold text-lg py-3 rounded-xl shadow-lg transition"
    } else {
        "w-full md:w-1/2 bg-gradient-to-r from-blue-500 to-indigo-600 hover:from-blue-400 hover:to-indigo-500 text-white font-semibold text-lg py-3 rounded-xl shadow-lg transition"
    };

    rsx! {
        document::Title { "CardioPredict | Predict" }

        div { class: "min-h-screen bg-gradient-to-br from-[#0f1419] via-[#1a1f2e] to-[#0d1117] flex justify-center items-start py-10 px-4",
            div { class: "w-full max-w-4xl space-y-8",
                div { class: "{SECTION_CLASS} text-center",
                    h1 { class: "text-3xl md:text-4xl font-bold text-blue-400", "CardioPredict" }
                    p { class: "text-gray-400 mt-2", "Enter your health metrics for AI-powered risk assessment" }
                }

                if let Some(message) = failure() {
                    ErrorAlert { message, on_dismiss: move |_| failure.set(None) }
                }

                form { class: "space-y-8", novalidate: true, onsubmit: on_submit,
                    div { class: SECTION_CLASS,
                        h2 { class: SECTION_TITLE_CLASS, "🧍 Personal Information" }
                        div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                            NumberField { label: "Age (years)", name: "age", placeholder: "e.g., 45", form, error: field_error("age") }
                            SelectField { label: "Gender", name: "gender", options: GENDER, form, error: field_error("gender") }
                            NumberField { label: "Height (cm)", name: "height", placeholder: "e.g., 170", form, error: field_error("height") }
                            NumberField { label: "Weight (kg)", name: "weight", placeholder: "e.g., 75", form, error: field_error("weight") }
                        }
                    }

                    div { class: SECTION_CLASS,
                        h2 { class: SECTION_TITLE_CLASS, "❤️ Health Indicators" }
                        div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                            NumberField { label: "Systolic BP", name: "ap_hi", placeholder: "e.g., 120", form, error: field_error("ap_hi") }
                            NumberField { label: "Diastolic BP", name: "ap_lo", placeholder: "e.g., 80", form, error: field_error("ap_lo") }
                            SelectField { label: "Cholesterol", name: "cholesterol", options: LEVELS, form, error: field_error("cholesterol") }
                            SelectField { label: "Glucose", name: "gluc", options: LEVELS, form, error: field_error("gluc") }
                        }
                    }

                    div { class: SECTION_CLASS,
                        h2 { class: SECTION_TITLE_CLASS, "🚬 Lifestyle Factors" }
                        div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                            SelectField { label: "Smoke", name: "smoke", options: YES_NO, form, error: field_error("smoke") }
                            SelectField { label: "Alcohol", name: "alco", options: YES_NO, form, error: field_error("alco") }
                            SelectField { label: "Physically Active", name: "active", options: YES_NO, form, error: field_error("active") }
                        }
                    }

                    div { class: "text-center",
                        button { class: button_class, r#type: "submit", disabled: loading(),
                            if loading() { "⏳ Predicting..." } else { "🔮 Predict Cardiovascular Risk" }
                        }
                    }
                }
            }
        }
    }
}
