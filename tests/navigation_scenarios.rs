//! End-to-end navigation scenarios against the public reducer API.
//!
//! The landing page's sections sit at document offsets 0, 800, ..., 4000
//! inside a main element padded by the 80px fixed navbar, so the anchors'
//! document tops are those offsets plus 80.

use std::collections::HashMap;

use cardio_predict::nav::{
    Link, LinkStyle, NavEffect, NavEvent, NavState, LANDING_LINKS, NAVBAR_OFFSET, SECONDARY_LINKS,
};

const SECTIONS: [&str; 6] = ["hero", "about", "features", "how", "testimonials", "cta"];

fn landing_layout() -> HashMap<&'static str, f64> {
    SECTIONS
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, i as f64 * 800.0 + NAVBAR_OFFSET))
        .collect()
}

fn landing_link(id: &str) -> Link {
    *LANDING_LINKS
        .iter()
        .find(|l| l.id == id)
        .expect("landing link exists")
}

fn scroll(state: &mut NavState, layout: &HashMap<&'static str, f64>, offset: f64) {
    state.apply(NavEvent::Scrolled { offset }, layout);
}

#[test]
fn scroll_scenario_picks_expected_sections() {
    let layout = landing_layout();
    let mut state = NavState::new("/");

    scroll(&mut state, &layout, 850.0);
    assert_eq!(state.active_link_id(), Some("about"));

    scroll(&mut state, &layout, 0.0);
    assert_eq!(state.active_link_id(), Some("hero"));

    scroll(&mut state, &layout, 3999.0);
    assert_eq!(state.active_link_id(), Some("testimonials"));

    scroll(&mut state, &layout, 4000.0);
    assert_eq!(state.active_link_id(), Some("cta"));
}

#[test]
fn unpadded_section_tops_activate_one_navbar_height_early() {
    // Sections measured from the document top with no navbar padding
    let layout: HashMap<&'static str, f64> = SECTIONS
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, i as f64 * 800.0))
        .collect();
    let mut state = NavState::new("/");

    scroll(&mut state, &layout, 850.0);
    assert_eq!(state.active_link_id(), Some("about"));

    // 3999 + 80 passes the cta top at 4000, so testimonials is skipped
    scroll(&mut state, &layout, 3999.0);
    assert_eq!(state.active_link_id(), Some("cta"));

    scroll(&mut state, &layout, 3919.0);
    assert_eq!(state.active_link_id(), Some("testimonials"));
    scroll(&mut state, &layout, 3920.0);
    assert_eq!(state.active_link_id(), Some("cta"));
}

#[test]
fn active_is_bottom_most_passed_section_for_all_offsets() {
    let layout = landing_layout();
    let mut state = NavState::new("/");

    for step in 0..=520 {
        let offset = step as f64 * 10.0;
        scroll(&mut state, &layout, offset);

        let position = offset + NAVBAR_OFFSET;
        let expected = SECTIONS
            .iter()
            .rev()
            .find(|id| layout[*id] <= position)
            .copied();
        assert_eq!(state.active_link_id(), expected, "offset {offset}");

        let active: Vec<_> = state
            .rendered_links()
            .into_iter()
            .filter(|r| r.style == LinkStyle::Active)
            .collect();
        assert_eq!(active.len(), 1, "exactly one active link at offset {offset}");
    }
}

#[test]
fn scrolling_down_never_moves_backward() {
    let layout = landing_layout();
    let mut state = NavState::new("/");
    let mut last_index = 0;

    for step in 0..=1000 {
        scroll(&mut state, &layout, step as f64 * 5.0);
        let id = state.active_link_id().expect("landing always has an active link");
        let index = SECTIONS.iter().position(|s| *s == id).expect("active is a section");
        assert!(index >= last_index, "moved from {last_index} back to {index}");
        last_index = index;
    }

    assert_eq!(last_index, SECTIONS.len() - 1);
}

#[test]
fn secondary_route_ignores_scroll() {
    let layout = landing_layout();
    let mut state = NavState::new("/predict");

    for offset in [0.0, 850.0, 3999.0, 10_000.0] {
        scroll(&mut state, &layout, offset);
        assert_eq!(state.active_link_id(), Some("predict"));
    }
    assert!(state.context().anchors().is_empty());
}

#[test]
fn clicking_predict_on_landing_navigates_away() {
    let layout = landing_layout();
    let mut state = NavState::new("/");
    state.apply(NavEvent::MenuToggled, &layout);
    assert!(state.menu_open());

    let effect = state.apply(NavEvent::LinkClicked(landing_link("predict")), &layout);

    assert!(!state.menu_open());
    assert_eq!(state.active_link_id(), Some("predict"));
    assert_eq!(effect, Some(NavEffect::Navigate("/predict")));
}

#[test]
fn every_click_is_optimistic_and_closes_menu() {
    let layout = landing_layout();

    for link in LANDING_LINKS {
        for menu_open in [false, true] {
            let mut state = NavState::new("/");
            if menu_open {
                state.apply(NavEvent::MenuToggled, &layout);
            }

            state.apply(NavEvent::LinkClicked(*link), &layout);

            assert_eq!(state.active_link_id(), Some(link.id));
            assert!(!state.menu_open());
        }
    }
}

#[test]
fn context_switch_never_leaks_active_id() {
    let layout = landing_layout();
    let mut state = NavState::new("/");
    scroll(&mut state, &layout, 2500.0);
    assert_eq!(state.active_link_id(), Some("how"));

    state.apply(NavEvent::RouteChanged("/predict".into()), &layout);
    let secondary_ids: Vec<_> = SECONDARY_LINKS.iter().map(|l| l.id).collect();
    let active = state.active_link_id().expect("secondary has links");
    assert!(secondary_ids.contains(&active));
    assert_eq!(active, "predict");

    state.apply(NavEvent::RouteChanged("/".into()), &layout);
    assert_eq!(state.active_link_id(), Some("hero"));
}

#[test]
fn highlighted_link_is_call_to_action_only_on_landing() {
    let layout = landing_layout();
    let mut state = NavState::new("/");
    state.apply(NavEvent::LinkClicked(landing_link("predict")), &layout);
    assert_eq!(
        state.style_of(&landing_link("predict")),
        LinkStyle::CallToAction
    );

    state.apply(NavEvent::RouteChanged("/predict".into()), &layout);
    let predict = SECONDARY_LINKS.iter().find(|l| l.id == "predict").unwrap();
    assert_eq!(state.style_of(predict), LinkStyle::Active);
}
