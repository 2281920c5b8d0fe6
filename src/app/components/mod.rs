//! Shared UI components for the Dioxus fullstack web UI.

pub mod error_alert;
pub mod form_inputs;
pub mod layout;
pub mod navbar;

pub use error_alert::ErrorAlert;
pub use form_inputs::{NumberField, SelectField};
pub use layout::AppLayout;
pub use navbar::Navbar;
