//! Combined header state: scroll compaction plus overlay visibility.
//!
//! The component keeps one `NavbarState` in a signal and feeds every user or
//! viewport event through [`NavbarState::handle`]. The returned
//! [`Transition`] says whether anything visible changed (so the signal is
//! only written, and the header only re-rendered, on real flips) and which
//! destination, if any, the event asked to navigate to.

use super::menu::MenuState;
use super::route::Destination;
use super::scroll::ScrollState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    /// Viewport reported a new vertical offset.
    Scrolled(f64),
    /// The mobile menu button was pressed.
    TogglePressed,
    /// A link inside the mobile overlay was activated.
    LinkActivated(Destination),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transition {
    pub changed: bool,
    pub navigate: Option<Destination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NavbarState {
    pub scroll: ScrollState,
    pub menu: MenuState,
}

impl NavbarState {
    pub fn new(compact_threshold: f64) -> Self {
        Self {
            scroll: ScrollState::new(compact_threshold),
            menu: MenuState::Closed,
        }
    }

    pub fn compacted(&self) -> bool {
        self.scroll.compacted
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn handle(&mut self, event: NavEvent) -> Transition {
        match event {
            NavEvent::Scrolled(offset) => Transition {
                changed: self.scroll.observe(offset),
                navigate: None,
            },
            NavEvent::TogglePressed => {
                self.menu.toggle();
                Transition {
                    changed: true,
                    navigate: None,
                }
            }
            NavEvent::LinkActivated(destination) => Transition {
                changed: self.menu.close(),
                navigate: Some(destination),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::route::is_active;

    #[test]
    fn mount_state_is_quiet() {
        let state = NavbarState::default();
        assert!(!state.compacted());
        assert!(!state.menu_open());
    }

    #[test]
    fn scrolling_leaves_menu_alone() {
        let mut state = NavbarState::default();
        state.handle(NavEvent::TogglePressed);
        for offset in [0.0, 49.0, 51.0, 300.0, 10.0] {
            state.handle(NavEvent::Scrolled(offset));
            assert_eq!(state.compacted(), offset > 50.0);
            assert!(state.menu_open());
        }
    }

    #[test]
    fn menu_leaves_scroll_alone() {
        let mut state = NavbarState::default();
        state.handle(NavEvent::Scrolled(90.0));
        state.handle(NavEvent::TogglePressed);
        state.handle(NavEvent::LinkActivated(Destination::About));
        assert!(state.compacted());
    }

    #[test]
    fn any_overlay_link_closes() {
        for destination in Destination::ALL {
            let mut state = NavbarState::default();
            state.handle(NavEvent::TogglePressed);
            let transition = state.handle(NavEvent::LinkActivated(destination));
            assert!(!state.menu_open());
            assert!(transition.changed);
            assert_eq!(transition.navigate, Some(destination));
        }
    }

    #[test]
    fn link_while_closed_still_navigates() {
        let mut state = NavbarState::default();
        let transition = state.handle(NavEvent::LinkActivated(Destination::Contact));
        assert!(!transition.changed);
        assert_eq!(transition.navigate, Some(Destination::Contact));
    }

    #[test]
    fn redundant_scroll_is_not_a_change() {
        let mut state = NavbarState::default();
        assert!(state.handle(NavEvent::Scrolled(80.0)).changed);
        assert!(!state.handle(NavEvent::Scrolled(81.0)).changed);
        assert!(!state.handle(NavEvent::Scrolled(82.0)).changed);
    }

    #[test]
    fn home_page_walkthrough() {
        let current_path = "/";
        let mut state = NavbarState::default();
        state.handle(NavEvent::Scrolled(0.0));
        assert!(!state.compacted());
        assert!(!state.menu_open());
        assert!(is_active(current_path, Destination::Home.href()));
        assert!(!is_active(current_path, Destination::Contact.href()));

        state.handle(NavEvent::Scrolled(80.0));
        assert!(state.compacted());
        assert!(!state.menu_open());

        state.handle(NavEvent::TogglePressed);
        assert!(state.menu_open());

        let transition = state.handle(NavEvent::LinkActivated(Destination::Home));
        assert!(!state.menu_open());
        assert_eq!(transition.navigate.map(Destination::href), Some("/"));
    }
}
