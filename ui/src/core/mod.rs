//! Platform-agnostic header logic: state transitions, route matching, class
//! composition and viewport subscriptions. Nothing in here renders.

pub mod menu;
pub mod navbar;
pub mod route;
pub mod scroll;
pub mod style;
pub mod viewport;

pub use menu::MenuState;
pub use navbar::{NavEvent, NavbarState, Transition};
pub use route::{is_active, Destination};
pub use scroll::{ScrollState, DEFAULT_COMPACT_THRESHOLD};
pub use style::HeaderStyle;
pub use viewport::{ManualScroll, ScrollSource, ScrollSubscription, SubscribeError, WindowScroll};
