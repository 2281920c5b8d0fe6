//! Site navbar driven by the navigation synchronizer.

use dioxus::prelude::*;

use crate::app::navigation::{use_nav_sync, NavSync};
use crate::nav::RenderedLink;

/// Fixed top navbar with desktop links and a collapsible mobile menu.
#[component]
pub fn Navbar() -> Element {
    let nav = use_nav_sync();
    let links = nav.links();
    let menu_open = nav.menu_open();

    rsx! {
        nav { class: "fixed top-0 left-0 w-full h-20 z-50 bg-[#0d1117]/90 backdrop-blur border-b border-[#30363d]",
            div { class: "max-w-7xl mx-auto h-full px-6 flex items-center justify-between",
                span { class: "text-2xl font-bold text-blue-400", "CardioPredict" }

                ul { class: "hidden md:flex items-center gap-8",
                    for item in links.iter().cloned() {
                        li { key: "{item.link.id}",
                            NavItem { item, nav }
                        }
                    }
                }

                button {
                    class: "md:hidden text-2xl text-gray-300",
                    r#type: "button",
                    "aria-label": "Toggle menu",
                    "aria-expanded": "{menu_open}",
                    onclick: move |_| nav.toggle_menu(),
                    if menu_open { "✕" } else { "☰" }
                }
            }

            if menu_open {
                ul { class: "md:hidden flex flex-col gap-4 px-6 py-4 bg-[#161b22] border-b border-[#30363d]",
                    for item in links.iter().cloned() {
                        li { key: "m-{item.link.id}",
                            NavItem { item, nav }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(item: RenderedLink, nav: NavSync) -> Element {
    let link = item.link;

    rsx! {
        a {
            class: item.style.css_class(),
            href: "{item.href}",
            onclick: move |e: MouseEvent| {
                // Scrolling and navigation are driven by the synchronizer
                e.prevent_default();
                nav.click(link);
            },
            "{link.label}"
        }
    }
}
