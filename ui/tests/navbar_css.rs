#![cfg(test)]
//! Selector lint for the navbar stylesheet.
//!
//! The state-driven classes come from `ui::core::style`; the structural ones
//! are written by hand in the component markup. Both must have a rule in
//! `assets/styling/navbar.css`, or the header silently loses its styling.

use ui::core::style::all_class_names;

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Classes written directly in `components/agency_navbar.rs`.
const STRUCTURAL: &[&str] = &[
    "agency-nav__inner",
    "agency-nav__brand",
    "agency-nav__brand-accent",
    "agency-nav__desktop",
    "agency-nav__list",
    "agency-nav__item",
    "agency-nav__item--dropdown",
    "agency-nav__trigger",
    "agency-nav__dropdown",
    "agency-nav__dropdown-grid",
    "agency-nav__card",
    "agency-nav__card-title",
    "agency-nav__card-text",
    "agency-nav__cta",
    "agency-nav__toggle",
    "agency-nav__overlay-panel",
    "agency-nav__overlay-cta",
    "agency-nav__icon",
    "visually-hidden",
];

fn has_rule(class: &str) -> bool {
    let selector = format!(".{class}");
    NAVBAR_CSS.match_indices(&selector).any(|(at, _)| {
        // Reject prefixes: `.agency-nav__link` must not be satisfied by `.agency-nav__link--active`.
        NAVBAR_CSS[at + selector.len()..]
            .chars()
            .next()
            .map_or(true, |c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
    })
}

#[test]
fn state_classes_have_rules() {
    let missing: Vec<_> = all_class_names()
        .into_iter()
        .filter(|class| !has_rule(class))
        .collect();
    assert!(missing.is_empty(), "navbar.css lacks rules for: {missing:?}");
}

#[test]
fn structural_classes_have_rules() {
    let missing: Vec<_> = STRUCTURAL.iter().filter(|class| !has_rule(class)).collect();
    assert!(missing.is_empty(), "navbar.css lacks rules for: {missing:?}");
}

#[test]
fn closed_overlay_ignores_pointer() {
    let closed = NAVBAR_CSS
        .split(".agency-nav__overlay--closed")
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .expect("closed overlay rule");
    assert!(closed.contains("pointer-events: none"), "closed overlay must not take input");
    assert!(closed.contains("opacity: 0"), "closed overlay must be transparent");
}

#[test]
fn responsive_breakpoint_exists() {
    assert!(NAVBAR_CSS.contains("@media (min-width: 768px)"));
}
