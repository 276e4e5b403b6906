//! Class-name composition for the header.
//!
//! Everything here is a pure function of the three render inputs
//! (`compacted`, `menu_open`, per-link `active`). Class names follow the
//! `agency-nav` block in `assets/styling/navbar.css`.

/// Join the names whose flag is set, in order, separated by one space.
pub fn classes(parts: &[(&str, bool)]) -> String {
    parts
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn header_class(compacted: bool) -> String {
    classes(&[
        ("agency-nav", true),
        ("agency-nav--expanded", !compacted),
        ("agency-nav--compacted", compacted),
    ])
}

pub fn desktop_link_class(active: bool) -> String {
    classes(&[
        ("agency-nav__link", true),
        ("agency-nav__link--active", active),
    ])
}

pub fn mobile_link_class(active: bool) -> String {
    classes(&[
        ("agency-nav__overlay-link", true),
        ("agency-nav__overlay-link--active", active),
    ])
}

pub fn overlay_class(open: bool) -> String {
    classes(&[
        ("agency-nav__overlay", true),
        ("agency-nav__overlay--open", open),
        ("agency-nav__overlay--closed", !open),
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleGlyph {
    Menu,
    Close,
}

/// Attribute set for one render of the header chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderStyle {
    pub header: String,
    pub overlay: String,
    /// Closed overlays stay mounted (for the fade) but take no input.
    pub overlay_interactive: bool,
    pub toggle_glyph: ToggleGlyph,
}

impl HeaderStyle {
    pub fn compute(compacted: bool, menu_open: bool) -> Self {
        Self {
            header: header_class(compacted),
            overlay: overlay_class(menu_open),
            overlay_interactive: menu_open,
            toggle_glyph: if menu_open {
                ToggleGlyph::Close
            } else {
                ToggleGlyph::Menu
            },
        }
    }
}

/// Every class name the functions above can emit. Used to keep the
/// stylesheet honest.
pub fn all_class_names() -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for flag in [false, true] {
        for class in [
            header_class(flag),
            desktop_link_class(flag),
            mobile_link_class(flag),
            overlay_class(flag),
        ] {
            for name in class.split_whitespace() {
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
        }
    }
    names
}
