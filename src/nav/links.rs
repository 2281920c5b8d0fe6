//! Link definitions and the fixed link tables.

/// The route that hosts the scrollable landing page.
pub const LANDING_ROUTE: &str = "/";

/// Height of the fixed navbar in CSS pixels. Added to the raw scroll offset
/// so a section counts as entered once its top reaches the navbar's bottom.
pub const NAVBAR_OFFSET: f64 = 80.0;

/// A navigable target in the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Link {
    /// Unique within its table. On the landing page this is also the
    /// element id of the section anchor.
    pub id: &'static str,
    pub label: &'static str,
    /// Route the link belongs to.
    pub path: &'static str,
    /// Render as a call-to-action button instead of a plain link
    pub highlight: bool,
}

impl Link {
    pub const fn new(id: &'static str, label: &'static str, path: &'static str) -> Self {
        Self {
            id,
            label,
            path,
            highlight: false,
        }
    }

    pub const fn highlighted(self) -> Self {
        Self {
            highlight: true,
            ..self
        }
    }

    /// True if the link targets a section of the landing page.
    pub fn is_anchor(&self) -> bool {
        self.path == LANDING_ROUTE
    }
}

/// Links shown while the landing page is displayed, in document order.
pub const LANDING_LINKS: &[Link] = &[
    Link::new("hero", "Home", LANDING_ROUTE),
    Link::new("about", "About", LANDING_ROUTE),
    Link::new("features", "Features", LANDING_ROUTE),
    Link::new("how", "How It Works", LANDING_ROUTE),
    Link::new("testimonials", "Testimonials", LANDING_ROUTE),
    Link::new("cta", "Get Started", LANDING_ROUTE),
    Link::new("predict", "Predict", "/predict").highlighted(),
];

/// Links shown on every other route.
pub const SECONDARY_LINKS: &[Link] = &[
    Link::new("home", "Home", LANDING_ROUTE),
    Link::new("predict", "Predict", "/predict").highlighted(),
];
