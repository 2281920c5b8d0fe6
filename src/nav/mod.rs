//! Navigation state synchronizer.
//!
//! Decides which navbar link is active across the two route contexts the
//! client has: the landing page (one route, anchored sections, scroll
//! tracking) and the secondary pages (one link per route, no scroll
//! tracking). Also owns the mobile menu flag.
//!
//! Everything here is browser-independent. The Dioxus/web-sys adapter in
//! `crate::app` feeds [`NavEvent`]s into [`NavState::apply`] and executes the
//! returned [`NavEffect`].

mod context;
mod links;
mod state;

pub use context::{LinkContext, LinkTables};
pub use links::{Link, LANDING_LINKS, LANDING_ROUTE, NAVBAR_OFFSET, SECONDARY_LINKS};
pub use state::{AnchorLayout, LinkStyle, NavEffect, NavEvent, NavState, RenderedLink};
