//! Portfolio Core Library
//!
//! Content and behavior behind the portfolio page, independent of any
//! renderer.
//!
//! ## Overview
//!
//! - [`reveal`]: the scroll-triggered reveal controller. Discovers tagged
//!   elements after the first render, watches them through a host
//!   intersection primitive, and toggles a "visible" marker as reports
//!   arrive.
//! - [`protocol`]: JSON messages between the controller's host and the page
//!   script.
//! - [`content`]: the static résumé data the UI renders.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::reveal::{event_channel, RevealController, RevealOptions, REVEAL_TAG};
//!
//! let (events_tx, mut events_rx) = event_channel();
//! let mut controller = RevealController::new(surface, Some(observer));
//!
//! let session = controller.mount(REVEAL_TAG, RevealOptions::default());
//! // host pushes batches into events_tx ...
//! controller.drain(&mut events_rx);
//! controller.stop(session);
//! ```

pub mod content;
pub mod error;
pub mod protocol;
pub mod reveal;

// Re-exports
pub use error::{RevealError, RevealResult};
pub use protocol::{BridgeCommand, BridgeEvent};
pub use reveal::{
    event_channel, EventBatch, EventReceiver, EventSender, Intersection, IntersectionPrimitive,
    ObservationSession, RenderSurface, RevealController, RevealMode, RevealOptions, SessionId,
    TargetId, TargetState, Threshold,
};
