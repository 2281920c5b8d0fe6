//! Route-to-link-context resolution.

use super::links::{Link, LANDING_LINKS, LANDING_ROUTE, SECONDARY_LINKS};

/// The pair of link tables a navbar chooses from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkTables {
    pub landing: &'static [Link],
    pub secondary: &'static [Link],
}

impl Default for LinkTables {
    fn default() -> Self {
        Self {
            landing: LANDING_LINKS,
            secondary: SECONDARY_LINKS,
        }
    }
}

impl LinkTables {
    pub const fn new(landing: &'static [Link], secondary: &'static [Link]) -> Self {
        Self { landing, secondary }
    }

    /// Pick the context for a route. Pure; the landing route gets the
    /// landing table, every other route the secondary one.
    pub fn resolve(&self, route: &str) -> LinkContext {
        if route == LANDING_ROUTE {
            LinkContext::landing(self.landing)
        } else {
            LinkContext::Secondary {
                links: self.secondary,
            }
        }
    }
}

/// Links valid for the displayed route.
///
/// Only `Landing` carries anchors, so scroll tracking has nothing to act on
/// in the secondary context.
#[derive(Clone, Debug, PartialEq)]
pub enum LinkContext {
    Landing {
        links: &'static [Link],
        /// Section links in document order (top to bottom).
        anchors: Vec<&'static Link>,
    },
    Secondary {
        links: &'static [Link],
    },
}

impl LinkContext {
    pub fn landing(links: &'static [Link]) -> Self {
        let anchors = links.iter().filter(|l| l.is_anchor()).collect();
        LinkContext::Landing { links, anchors }
    }

    pub fn links(&self) -> &'static [Link] {
        match self {
            LinkContext::Landing { links, .. } | LinkContext::Secondary { links } => *links,
        }
    }

    /// Section links, empty outside the landing context.
    pub fn anchors(&self) -> &[&'static Link] {
        match self {
            LinkContext::Landing { anchors, .. } => anchors,
            LinkContext::Secondary { .. } => &[],
        }
    }

    pub fn is_landing(&self) -> bool {
        matches!(self, LinkContext::Landing { .. })
    }

    pub fn find(&self, id: &str) -> Option<&'static Link> {
        self.links().iter().find(|l| l.id == id)
    }

    /// Active link when the context is entered for `route`.
    ///
    /// Landing starts on its first link. Secondary picks the link whose path
    /// is exactly `route`, falling back to the first link when no link owns
    /// the route. `None` only for an empty table.
    pub fn default_active(&self, route: &str) -> Option<&'static str> {
        let links = self.links();
        let link = match self {
            LinkContext::Landing { .. } => links.first(),
            LinkContext::Secondary { .. } => links
                .iter()
                .find(|l| l.path == route)
                .or_else(|| links.first()),
        };
        link.map(|l| l.id)
    }
}
