//! Presentation components for the portfolio page
//!
//! Each component renders the literal content it is given. The only logic is
//! class-name assembly and the link-target check on chips.

mod chip;
mod footer;
mod header;
mod icons;
mod nav;
mod section;

pub use chip::*;
pub use footer::*;
pub use header::*;
pub use icons::*;
pub use nav::*;
pub use section::*;
