//! Dioxus fullstack application entry point.
//!
//! This module provides the root App component, the route table and the
//! browser-facing glue around the navigation core.

use dioxus::prelude::*;

pub mod api;
pub mod components;
pub mod dom;
pub mod form;
pub mod navigation;
pub mod pages;
pub mod prediction_context;

use components::AppLayout;
use pages::{Home, Predict, Results};
use prediction_context::use_prediction_provider;

const TAILWIND_CDN: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Holds the last prediction across the Predict -> Results navigation
    use_prediction_provider();

    rsx! {
        document::Title { "CardioPredict" }
        document::Script { src: TAILWIND_CDN }
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/predict")]
        Predict {},
        #[route("/result")]
        Results {},
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{LinkTables, LANDING_ROUTE};

    #[test]
    fn test_route_paths_match_link_tables() {
        assert_eq!(Route::Home {}.to_string(), LANDING_ROUTE);
        assert_eq!(Route::Predict {}.to_string(), "/predict");
        assert_eq!(Route::Results {}.to_string(), "/result");

        let tables = LinkTables::default();
        assert!(tables.resolve(&Route::Home {}.to_string()).is_landing());
        assert!(!tables.resolve(&Route::Results {}.to_string()).is_landing());
    }
}
