//! Placeholder pages the header routes between.

mod contact;
mod home;
mod not_found;

pub use contact::Contact;
pub use home::Home;
pub use not_found::NotFound;
