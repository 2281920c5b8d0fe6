//! Navbar-owned navigation synchronizer.
//!
//! Thin adapter between Dioxus/the browser and [`NavState`]: the router feeds
//! route changes, a window scroll listener (present only while the landing
//! context is active) feeds scroll offsets, and navbar clicks feed link
//! activations. Effects returned by the reducer are executed by
//! [`dom::perform`].

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use super::dom::{self, DomLayout, ScrollListener};
use super::Route;
use crate::nav::{Link, NavEffect, NavEvent, NavState, RenderedLink};

/// Handle to one navbar's navigation state.
#[derive(Clone, Copy, PartialEq)]
pub struct NavSync {
    state: Signal<NavState>,
}

impl NavSync {
    pub fn links(&self) -> Vec<RenderedLink> {
        self.state.read().rendered_links()
    }

    pub fn menu_open(&self) -> bool {
        self.state.read().menu_open()
    }

    pub fn toggle_menu(&self) {
        self.dispatch(NavEvent::MenuToggled);
    }

    /// Activate `link` and carry out the resulting scroll or navigation.
    pub fn click(&self, link: Link) {
        if let Some(effect) = self.dispatch(NavEvent::LinkClicked(link)) {
            dom::perform(effect);
        }
    }

    // Fails quietly once the owning component is gone. Subscribers are only
    // notified when the event changed something.
    fn dispatch(&self, event: NavEvent) -> Option<NavEffect> {
        let mut state = self.state;
        let mut next = state.try_peek().ok()?.clone();
        let effect = next.apply(event, &DomLayout);

        let changed = *state.try_peek().ok()? != next;
        if changed {
            *state.try_write().ok()? = next;
        }
        effect
    }
}

/// Create the navigation state for the calling component and wire it to the
/// router and the window scroll position.
pub fn use_nav_sync() -> NavSync {
    use_nav_sync_at(use_route::<Route>().to_string())
}

/// [`use_nav_sync`] for an explicit route path.
fn use_nav_sync_at(path: String) -> NavSync {
    let state = use_signal({
        let path = path.clone();
        move || NavState::new(&path)
    });
    let sync = NavSync { state };

    use_effect(use_reactive!(|path| {
        let stale = state.try_peek().is_ok_and(|s| s.route() != path);
        if stale {
            sync.dispatch(NavEvent::RouteChanged(path));
        }
    }));

    let landing = use_memo(move || state.read().is_landing());
    let listener: Rc<RefCell<Option<ScrollListener>>> = use_hook(|| Rc::new(RefCell::new(None)));

    let slot = listener.clone();
    use_effect(move || {
        let landing = landing();
        let mut slot = slot.borrow_mut();

        if !landing {
            // Dropping the guard detaches the listener
            slot.take();
            return;
        }

        if slot.is_none() {
            *slot = ScrollListener::attach(move |offset| {
                sync.dispatch(NavEvent::Scrolled { offset });
            });
            // Pick up the position the page was restored at
            sync.dispatch(NavEvent::Scrolled {
                offset: dom::scroll_offset(),
            });
        }
    });

    use_drop(move || {
        listener.borrow_mut().take();
    });

    sync
}
