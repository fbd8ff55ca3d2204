//! Portfolio UI Components
//!
//! Dioxus components for the portfolio page: navigation bar, hero header,
//! sections, cards, chips, pills, footer and inline icons.
//!
//! ## Reveal Targets
//!
//! `Header` and `Section` carry the `reveal` class so the reveal controller
//! discovers them after the first render. Grids inside sections can opt in by
//! adding the same class.

pub mod components;

pub use components::*;
