//! Navigation targets and active-route detection.

pub const HOME_PATH: &str = "/";
pub const CONTACT_PATH: &str = "/contact";

/// Everything the header can ask the router (or the browser) to go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    Contact,
    /// Same-page anchor, never changes the path.
    Services,
    /// Same-page anchor, never changes the path.
    About,
}

impl Destination {
    pub const ALL: [Destination; 4] = [Self::Home, Self::Services, Self::About, Self::Contact];

    pub fn href(self) -> &'static str {
        match self {
            Self::Home => HOME_PATH,
            Self::Contact => CONTACT_PATH,
            Self::Services => "#services",
            Self::About => "#about",
        }
    }

    /// Route destinations go through the router; anchors are plain links.
    pub fn is_route(self) -> bool {
        matches!(self, Self::Home | Self::Contact)
    }

    pub fn is_active_at(self, current_path: &str) -> bool {
        self.is_route() && is_active(current_path, self.href())
    }
}

/// A link is active when its target is exactly the current path.
pub fn is_active(current_path: &str, candidate: &str) -> bool {
    current_path == candidate
}
