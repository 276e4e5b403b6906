//! Shared UI crate for the agency site: the header component, its state core
//! and the pages it routes between.

pub mod config;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Site header (components/agency_navbar.rs)
    mod agency_navbar;
    pub use agency_navbar::AgencyNavbar;

    mod icons;

    mod scroll_watcher;
    pub use scroll_watcher::use_scroll_watcher;
}

#[cfg(test)]
mod tests;
