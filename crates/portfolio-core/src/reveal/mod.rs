//! Scroll-triggered reveal controller
//!
//! Elements tagged for the effect fade in when they cross into the viewport.
//!
//! ## Overview
//!
//! ```text
//! ┌──────────────┐ find_tagged / set_marker ┌──────────────────────┐
//! │RenderSurface │◄─────────────────────────│                      │
//! └──────────────┘                          │   RevealController   │
//! ┌──────────────┐ observe / unobserve      │   (one per view)     │
//! │Intersection  │◄─────────────────────────│                      │
//! │Primitive     │                          │  ObservationSession  │
//! └──────┬───────┘                          │  └── reduce()        │
//!        │ EventBatch  ──► event_channel ──►│                      │
//!        └──────────────────────────────────┴──────────────────────┘
//! ```
//!
//! - `mount` runs discovery on the surface (only after the first render) and
//!   starts a session over what it finds.
//! - Every reported target goes through the pure [`reduce`] function.
//! - `stop` is idempotent; late batches for a stopped session are dropped.

mod channel;
mod controller;
mod host;
mod reducer;
mod session;
mod types;

pub use channel::{event_channel, EventReceiver, EventSender};
pub use controller::RevealController;
pub use host::{IntersectionPrimitive, RenderSurface};
pub use reducer::{reduce, Effect, Transition};
pub use session::ObservationSession;
pub use types::{
    EventBatch, Intersection, RevealMode, RevealOptions, SessionId, TargetId, TargetState,
    Threshold,
};

/// Class name that tags an element for the reveal effect.
pub const REVEAL_TAG: &str = "reveal";

/// Class name applied to a revealed element.
pub const VISIBLE_MARKER: &str = "reveal--visible";
