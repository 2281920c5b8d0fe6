//! Route layout: the navbar persists across client-side route changes.

use dioxus::prelude::*;

use super::Navbar;
use crate::app::Route;

/// Wraps every page. The `pt-20` offset keeps content clear of the fixed
/// 80px navbar.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div { class: "min-h-screen bg-[#0d1117] text-[#e6edf3]",
            Navbar {}
            main { class: "pt-20",
                Outlet::<Route> {}
            }
        }
    }
}
