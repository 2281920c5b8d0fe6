//! Landing page. Section ids double as navbar anchors.

use dioxus::prelude::*;

use crate::app::Route;

const CARD_CLASS: &str = "bg-[#1a1f2e] rounded-2xl p-8 shadow-md border border-[#30363d] transition-all duration-300 hover:scale-105 hover:border-blue-500";
const BUTTON_CLASS: &str = "inline-block bg-gradient-to-r from-blue-500 to-indigo-600 hover:from-blue-400 hover:to-indigo-500 text-white font-semibold text-lg px-8 py-3 rounded-xl shadow-lg transition-all duration-200";

/// (icon, title, description)
type Card = (&'static str, &'static str, &'static str);

const ABOUT: &[Card] = &[
    ("⚙️", "Smart Analysis", "AI evaluates your vitals and predicts risk levels."),
    ("📊", "Data Driven", "Built on validated cardiovascular datasets."),
    ("🧠", "Easy to Use", "Fill simple details; AI handles the rest."),
];

const FEATURES: &[Card] = &[
    ("⚡", "Real-time Predictions", "Get instant AI feedback on your heart health."),
    ("🔒", "Secure & Private", "Your data is always safe and confidential."),
    ("📊", "Scientifically Backed", "Reliable predictions based on medical datasets."),
];

const STEPS: &[Card] = &[
    ("1️⃣", "Enter Details", "Provide your basic health metrics."),
    ("2️⃣", "AI Analysis", "The AI evaluates your risk factors."),
    ("3️⃣", "Insights", "View prediction score & recommendations."),
];

/// (name, quote)
const TESTIMONIALS: &[(&str, &str)] = &[
    ("Alice", "CardioPredict gave me clear insights about my heart health!"),
    ("Bob", "Simple and accurate AI predictions I can trust."),
    ("Carol", "Highly recommend for anyone wanting proactive heart care."),
];

#[component]
pub fn Home() -> Element {
    let version = env!("CP_VERSION");

    rsx! {
        div { class: "bg-gradient-to-br from-[#0f1419] via-[#1a1f2e] to-[#0d1117]",
            section { id: "hero", class: "flex flex-col items-center justify-center text-center px-6 py-24 md:py-32",
                h1 { class: "text-5xl md:text-6xl font-bold text-blue-400 mb-4", "CardioPredict" }
                p { class: "text-gray-400 text-lg md:text-xl mb-8 max-w-2xl",
                    "AI-powered cardiovascular risk prediction. Enter your health metrics and get insights instantly."
                }
                Link { class: "{BUTTON_CLASS}", to: Route::Predict {}, "🔮 Start Prediction" }
            }

            section { id: "about", class: "py-24 px-6 md:px-16 bg-[#161b22] border-y border-[#30363d]",
                h2 { class: "text-4xl font-bold text-blue-400 text-center mb-8", "About CardioPredict" }
                p { class: "text-gray-300 text-center max-w-3xl mx-auto mb-10",
                    "CardioPredict is an AI-powered platform designed to analyze key health metrics and estimate your cardiovascular risk. Make informed health decisions and take control of your heart health."
                }
                CardGrid { cards: ABOUT }
            }

            section { id: "features", class: "py-24 px-6 md:px-16",
                h2 { class: "text-4xl font-bold text-blue-400 text-center mb-12", "Features" }
                CardGrid { cards: FEATURES }
            }

            section { id: "how", class: "py-24 px-6 md:px-16 bg-[#11151d]",
                h2 { class: "text-4xl font-bold text-blue-400 text-center mb-12", "How It Works" }
                CardGrid { cards: STEPS }
            }

            section { id: "testimonials", class: "py-24 px-6 md:px-16",
                h2 { class: "text-4xl font-bold text-blue-400 text-center mb-12", "Testimonials" }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-10 max-w-6xl mx-auto",
                    for (name, quote) in TESTIMONIALS.iter() {
                        div { key: "{name}", class: CARD_CLASS,
                            div { class: "text-3xl mb-2", "💬" }
                            p { class: "text-gray-300 mb-2", "\"{quote}\"" }
                            p { class: "text-blue-300 font-semibold", "- {name}" }
                        }
                    }
                }
            }

            section { id: "cta", class: "py-24 text-center bg-[#161b22] border-t border-[#30363d]",
                h2 { class: "text-4xl font-bold text-blue-400 mb-4", "Ready to Know Your Risk?" }
                p { class: "text-gray-400 mb-8 max-w-xl mx-auto",
                    "Take control of your heart health with CardioPredict. Personalized AI feedback in minutes."
                }
                Link { class: "{BUTTON_CLASS}", to: Route::Predict {}, "🚀 Start Prediction" }
            }

            footer { class: "bg-[#0d1117] border-t border-[#30363d] py-10 text-center text-gray-500",
                p { "© CardioPredict. All Rights Reserved." }
                p { class: "text-sm mt-2", "Made with ❤️ using Rust & Dioxus · v{version}" }
            }
        }
    }
}

#[component]
fn CardGrid(cards: &'static [Card]) -> Element {
    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-3 gap-10 max-w-6xl mx-auto",
            for (icon, title, desc) in cards.iter() {
                div { key: "{title}", class: CARD_CLASS,
                    div { class: "text-4xl mb-4", "{icon}" }
                    h3 { class: "text-xl font-semibold text-blue-300 mb-2", "{title}" }
                    p { class: "text-gray-400", "{desc}" }
                }
            }
        }
    }
}
