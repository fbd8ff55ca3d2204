//! Page-level components.

mod home;

pub use home::Home;
