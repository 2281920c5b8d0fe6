//! Dismissable error alert component.

use dioxus::prelude::*;

/// A dismissable alert shown above a form when a request fails.
#[component]
pub fn ErrorAlert(
    /// The error message to display
    message: String,
    /// Called when the dismiss button is clicked
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between bg-red-500/10 border border-red-500 text-red-400 rounded-xl p-4",
            role: "alert",
            span { "⚠️ {message}" }
            button {
                class: "ml-4 text-red-300 hover:text-red-100 text-xl",
                r#type: "button",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
