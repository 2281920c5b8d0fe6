//! Navigation state and its reducer.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use super::context::{LinkContext, LinkTables};
use super::links::{Link, NAVBAR_OFFSET};

/// Read access to the document positions of section anchors.
pub trait AnchorLayout {
    /// Top of the anchor element in document coordinates, `None` if the
    /// element does not exist.
    fn anchor_top(&self, id: &str) -> Option<f64>;
}

impl<K, S> AnchorLayout for HashMap<K, f64, S>
where
    K: Borrow<str> + Eq + Hash,
    S: BuildHasher,
{
    fn anchor_top(&self, id: &str) -> Option<f64> {
        self.get(id).copied()
    }
}

/// Inputs to the reducer.
#[derive(Clone, Debug, PartialEq)]
pub enum NavEvent {
    /// Viewport scrolled; `offset` is the raw vertical scroll offset.
    Scrolled { offset: f64 },
    RouteChanged(String),
    LinkClicked(Link),
    MenuToggled,
}

/// Side effects the browser adapter must carry out after a reducer step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEffect {
    /// Full page load of the path
    Navigate(&'static str),
    /// Smooth-scroll the anchor with this id to the top of the viewport
    ScrollToAnchor(&'static str),
}

/// Visual classification of a link, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStyle {
    CallToAction,
    Active,
    Inactive,
}

impl LinkStyle {
    pub fn css_class(&self) -> &'static str {
        match self {
            LinkStyle::CallToAction => {
                "bg-gradient-to-r from-blue-500 to-indigo-600 hover:from-blue-400 hover:to-indigo-500 text-white font-semibold px-5 py-2 rounded-xl shadow-lg transition"
            }
            LinkStyle::Active => "text-blue-400 font-semibold border-b-2 border-blue-400 pb-1",
            LinkStyle::Inactive => "text-gray-300 hover:text-blue-300 transition",
        }
    }
}

/// What the navbar needs to draw one link.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedLink {
    pub link: Link,
    pub style: LinkStyle,
    pub href: String,
}

/// Active link and mobile menu state for one navbar instance.
#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    tables: LinkTables,
    navbar_offset: f64,
    route: String,
    context: LinkContext,
    active: Option<&'static str>,
    menu_open: bool,
}

impl NavState {
    /// State for the built-in link tables and navbar height.
    pub fn new(route: &str) -> Self {
        Self::with_tables(LinkTables::default(), NAVBAR_OFFSET, route)
    }

    pub fn with_tables(tables: LinkTables, navbar_offset: f64, route: &str) -> Self {
        let context = tables.resolve(route);
        let active = context.default_active(route);
        Self {
            tables,
            navbar_offset,
            route: route.to_string(),
            context,
            active,
            menu_open: false,
        }
    }

    /// Apply one event and return the effect the caller must perform, if any.
    pub fn apply<L>(&mut self, event: NavEvent, layout: &L) -> Option<NavEffect>
    where
        L: AnchorLayout + ?Sized,
    {
        match event {
            NavEvent::Scrolled { offset } => {
                self.on_scroll(offset, layout);
                None
            }
            NavEvent::RouteChanged(route) => {
                self.on_route_changed(route);
                None
            }
            NavEvent::LinkClicked(link) => self.on_link_clicked(link, layout),
            NavEvent::MenuToggled => {
                self.menu_open = !self.menu_open;
                None
            }
        }
    }

    fn on_scroll<L>(&mut self, offset: f64, layout: &L)
    where
        L: AnchorLayout + ?Sized,
    {
        let LinkContext::Landing { anchors, .. } = &self.context else {
            return;
        };

        let position = offset + self.navbar_offset;

        // Bottom-most section whose top has been passed
        let entered = anchors
            .iter()
            .rev()
            .find(|link| {
                layout
                    .anchor_top(link.id)
                    .is_some_and(|top| top <= position)
            })
            .map(|link| link.id);

        // Above the first section: keep whatever was active
        if let Some(id) = entered {
            if self.active != Some(id) {
                tracing::debug!("Scroll position {} activates section {}", position, id);
                self.active = Some(id);
            }
        }
    }

    fn on_route_changed(&mut self, route: String) {
        if route == self.route {
            return;
        }

        self.menu_open = false;
        let context = self.tables.resolve(&route);
        self.active = context.default_active(&route);
        tracing::debug!(
            "Route {} -> {}: {} context, active {:?}",
            self.route,
            route,
            if context.is_landing() {
                "landing"
            } else {
                "secondary"
            },
            self.active
        );
        self.context = context;
        self.route = route;
    }

    fn on_link_clicked<L>(&mut self, link: Link, layout: &L) -> Option<NavEffect>
    where
        L: AnchorLayout + ?Sized,
    {
        self.menu_open = false;

        if self.context.find(link.id).is_none() {
            tracing::debug!("Ignoring click on {} (not in current context)", link.id);
            return None;
        }

        self.active = Some(link.id);

        if link.path != self.route {
            return Some(NavEffect::Navigate(link.path));
        }

        if self.context.is_landing() && layout.anchor_top(link.id).is_some() {
            Some(NavEffect::ScrollToAnchor(link.id))
        } else {
            None
        }
    }

    /// Currently active link id; `None` only when the context has no links.
    pub fn active_link_id(&self) -> Option<&'static str> {
        self.active
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn context(&self) -> &LinkContext {
        &self.context
    }

    pub fn is_landing(&self) -> bool {
        self.context.is_landing()
    }

    /// Call-to-action links on the landing page never show as active.
    pub fn style_of(&self, link: &Link) -> LinkStyle {
        if link.highlight && self.context.is_landing() {
            LinkStyle::CallToAction
        } else if self.active == Some(link.id) {
            LinkStyle::Active
        } else {
            LinkStyle::Inactive
        }
    }

    pub fn rendered_links(&self) -> Vec<RenderedLink> {
        let landing = self.context.is_landing();
        self.context
            .links()
            .iter()
            .map(|link| RenderedLink {
                link: *link,
                style: self.style_of(link),
                href: if landing && link.is_anchor() {
                    format!("#{}", link.id)
                } else {
                    link.path.to_string()
                },
            })
            .collect()
    }
}
