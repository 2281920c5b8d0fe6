//! Browser scroll/DOM boundary for the navigation synchronizer.
//!
//! Every function has a non-WASM stub so SSR builds and native tests compile;
//! the stubs report "nothing there" and never touch state.

use crate::nav::{AnchorLayout, NavEffect};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Anchor positions read from the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomLayout;

impl AnchorLayout for DomLayout {
    fn anchor_top(&self, id: &str) -> Option<f64> {
        element_top(id)
    }
}

/// Execute a reducer effect against the browser.
pub fn perform(effect: NavEffect) {
    match effect {
        NavEffect::Navigate(path) => navigate_to(path),
        NavEffect::ScrollToAnchor(id) => {
            if !scroll_to_anchor(id) {
                tracing::debug!("No anchor element #{}, skipping scroll", id);
            }
        }
    }
}

// ============ WASM implementations ============

#[cfg(target_arch = "wasm32")]
fn element_top(id: &str) -> Option<f64> {
    let window = web_sys::window()?;
    let element = window.document()?.get_element_by_id(id)?;
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    Some(element.get_bounding_client_rect().top() + scroll_y)
}

/// Current vertical scroll offset of the viewport
#[cfg(target_arch = "wasm32")]
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scroll the element with `id` to the top of the viewport.
/// Returns false if there is no such element.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_anchor(id: &str) -> bool {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };

    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

/// Full page load of `path`
#[cfg(target_arch = "wasm32")]
pub fn navigate_to(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        tracing::warn!("Navigation to {} failed: {:?}", path, e);
    }
}

/// Window scroll subscription; the listener is removed on drop.
#[cfg(target_arch = "wasm32")]
pub struct ScrollListener {
    window: web_sys::Window,
    // Owned so the JS callback stays valid until the listener is removed
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl ScrollListener {
    /// Call `on_scroll` with the current scroll offset on every scroll event.
    pub fn attach(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;

        let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
            on_scroll(scroll_offset());
        }) as Box<dyn FnMut(_)>);

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .ok()?;

        tracing::debug!("Scroll listener attached");
        Some(Self { window, callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ScrollListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref());
        tracing::debug!("Scroll listener removed");
    }
}

// ============ SSR / native stubs ============

#[cfg(not(target_arch = "wasm32"))]
fn element_top(_id: &str) -> Option<f64> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_offset() -> f64 {
    0.0
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_anchor(_id: &str) -> bool {
    false
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate_to(path: &str) {
    tracing::debug!("navigate_to({}) ignored outside the browser", path);
}

#[cfg(not(target_arch = "wasm32"))]
pub struct ScrollListener;

#[cfg(not(target_arch = "wasm32"))]
impl ScrollListener {
    pub fn attach(_on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
        None
    }
}
