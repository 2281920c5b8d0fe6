//! Prediction results page.

use dioxus::prelude::*;
use serde_json::{Map, Value};

use crate::app::api::{display_value, Factor, PredictionResponse};
use crate::app::prediction_context::use_prediction;

const CARD_CLASS: &str = "bg-[rgba(0,0,0,0.85)] p-6 rounded-2xl shadow-xl text-white";
const FACTOR_CARD_CLASS: &str = "bg-[rgba(0,0,0,0.75)] p-6 rounded-2xl shadow-md text-white";

#[component]
pub fn Results() -> Element {
    let prediction = use_prediction();

    rsx! {
        document::Title { "CardioPredict | Result" }
        match prediction.result() {
            Some(result) => rsx! { ResultSummary { result } },
            None => rsx! {
                p { class: "text-center mt-10 text-gray-400", "No result to display." }
            },
        }
    }
}

#[component]
fn ResultSummary(result: PredictionResponse) -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-[#0f1419] via-[#1a1f2e] to-[#0d1117] flex justify-center py-10 px-4",
            div { class: "w-full max-w-5xl space-y-6",
                div { class: "text-center space-y-2",
                    h1 { class: "text-4xl md:text-5xl font-bold text-blue-400", "CardioPredict Results" }
                    p { class: "text-gray-400 text-lg md:text-xl", "Your cardiovascular risk assessment summary" }
                }

                div { class: "{CARD_CLASS} space-y-4 text-center",
                    p { class: "text-lg md:text-xl font-semibold", "Predicted Risk:" }
                    p { class: "text-3xl md:text-4xl font-bold mt-1", "{result.probability_percent()}" }
                    p { class: "text-2xl md:text-3xl font-bold mt-1 {result.risk_level.css_class()}",
                        "{result.risk_level.label()} Risk"
                    }
                    p { class: "text-gray-400 mt-1 text-sm md:text-base",
                        "Model Accuracy: "
                        span { class: "text-yellow-400 font-semibold", "{result.accuracy_percent()}" }
                        " | ⚠️ Always verify predictions with a healthcare professional."
                    }
                    FactorBar {
                        healthy: result.healthy_factors.len(),
                        unhealthy: result.unhealthy_factors.len(),
                        share: result.healthy_share(),
                    }
                }

                InfoCard { title: "🧍 Personal Information", info: result.personal_info.clone() }
                InfoCard { title: "📊 Calculated Values", info: result.calculated_info.clone() }

                FactorList {
                    title: "✅ Healthy Factors",
                    title_class: "text-green-400",
                    empty: "No strong healthy indicators detected.",
                    factors: result.shown_healthy_factors().into_iter().cloned().collect::<Vec<_>>(),
                }
                FactorList {
                    title: "⚠️ Unhealthy Factors",
                    title_class: "text-red-400",
                    empty: "No major risk factors detected.",
                    factors: result.shown_unhealthy_factors().into_iter().cloned().collect::<Vec<_>>(),
                }

                div { class: "flex justify-center",
                    button {
                        class: "bg-blue-500 text-white px-6 py-2 rounded-xl hover:bg-blue-600 font-semibold text-lg md:text-xl",
                        r#type: "button",
                        onclick: move |_| navigator.go_back(),
                        "🔁 Go Back"
                    }
                }
            }
        }
    }
}

/// Healthy vs unhealthy factor counts as a proportion bar
#[component]
fn FactorBar(healthy: usize, unhealthy: usize, #[props(!optional)] share: Option<f64>) -> Element {
    let Some(share) = share else {
        return rsx! {};
    };

    rsx! {
        div { class: "max-w-sm mx-auto p-4 space-y-2",
            div { class: "flex h-4 rounded-full overflow-hidden bg-red-400",
                div { class: "bg-emerald-400", style: "width: {share:.1}%" }
            }
            div { class: "flex justify-between text-sm",
                span { class: "text-emerald-400", "Healthy Factors: {healthy}" }
                span { class: "text-red-400", "Unhealthy Factors: {unhealthy}" }
            }
        }
    }
}

#[component]
fn InfoCard(title: &'static str, info: Map<String, Value>) -> Element {
    rsx! {
        div { class: "{CARD_CLASS} shadow-inner",
            h3 { class: "text-2xl md:text-3xl font-bold mb-3 text-center text-blue-400", "{title}" }
            ul { class: "grid grid-cols-1 md:grid-cols-2 gap-3 text-sm md:text-base",
                for (key, value) in info.iter() {
                    li { key: "{key}",
                        strong { "{key}: " }
                        "{display_value(value)}"
                    }
                }
            }
        }
    }
}

#[component]
fn FactorList(
    title: &'static str,
    title_class: &'static str,
    empty: &'static str,
    factors: Vec<Factor>,
) -> Element {
    rsx! {
        div { class: FACTOR_CARD_CLASS,
            h3 { class: "{title_class} font-bold mb-2 text-2xl md:text-3xl", "{title}" }
            if factors.is_empty() {
                p { class: "text-gray-500", "{empty}" }
            } else {
                ul { class: "list-disc pl-5 text-sm md:text-base text-gray-300",
                    for factor in factors.iter() {
                        li { key: "{factor.factor}",
                            strong { "{factor.factor}: " }
                            "{factor.description}"
                        }
                    }
                }
            }
        }
    }
}
