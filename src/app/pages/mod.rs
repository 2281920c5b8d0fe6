//! Dioxus fullstack page components.

mod home;
mod predict;
mod results;

pub use home::Home;
pub use predict::Predict;
pub use results::Results;
