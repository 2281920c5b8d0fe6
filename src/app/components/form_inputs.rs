//! Reusable prediction form inputs bound to the form signal.

use dioxus::prelude::*;

use crate::app::form::PredictionForm;

const INPUT_CLASS: &str = "w-full p-3 rounded-xl bg-[#0d1117] border-2 border-[#30363d] focus:border-blue-500 transition";

fn set_field(mut form: Signal<PredictionForm>, name: &str, value: String) {
    if let Some(slot) = form.write().field_mut(name) {
        *slot = value;
    }
}

/// A labeled numeric input.
#[component]
pub fn NumberField(
    /// Input label
    label: &'static str,
    /// Form field name
    name: &'static str,
    placeholder: &'static str,
    form: Signal<PredictionForm>,
    /// Validation message for this field
    #[props(!optional)]
    error: Option<String>,
) -> Element {
    let value = form.read().field(name).unwrap_or_default().to_string();

    rsx! {
        div {
            label { class: "block mb-2 text-sm font-medium", r#for: name, "{label}" }
            input {
                class: INPUT_CLASS,
                id: name,
                name: name,
                r#type: "number",
                step: "any",
                placeholder: placeholder,
                value: "{value}",
                oninput: move |e| set_field(form, name, e.value()),
            }
            if let Some(error) = error {
                p { class: "text-red-400 text-sm mt-1", "{error}" }
            }
        }
    }
}

/// A labeled select with a "Select" placeholder option.
#[component]
pub fn SelectField(
    /// Input label
    label: &'static str,
    /// Form field name
    name: &'static str,
    /// (value, label) pairs
    options: &'static [(&'static str, &'static str)],
    form: Signal<PredictionForm>,
    /// Validation message for this field
    #[props(!optional)]
    error: Option<String>,
) -> Element {
    let value = form.read().field(name).unwrap_or_default().to_string();

    rsx! {
        div {
            label { class: "block mb-2 text-sm font-medium", r#for: name, "{label}" }
            select {
                class: INPUT_CLASS,
                id: name,
                name: name,
                value: "{value}",
                onchange: move |e| set_field(form, name, e.value()),
                option { value: "", "Select" }
                for (opt_value, opt_label) in options.iter() {
                    option {
                        key: "{opt_value}",
                        value: *opt_value,
                        selected: value == *opt_value,
                        "{opt_label}"
                    }
                }
            }
            if let Some(error) = error {
                p { class: "text-red-400 text-sm mt-1", "{error}" }
            }
        }
    }
}
