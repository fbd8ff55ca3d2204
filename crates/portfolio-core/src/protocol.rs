//! JSON messages exchanged with the page script that hosts the reveal effect.
//!
//! ```text
//! host ── BridgeCommand {"op": ...} ──► page
//! host ◄── BridgeEvent {"kind": ...} ── page
//! ```
//!
//! The page answers `discover` with `discovered` once an animation frame has
//! passed, and reports intersections as `batch` messages tagged with the
//! session that asked for them.

use serde::{Deserialize, Serialize};

use crate::error::RevealResult;
use crate::reveal::{EventBatch, Intersection, SessionId, TargetId, Threshold};

/// Host to page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BridgeCommand {
    /// Query elements carrying `tag` after the next frame
    Discover { tag: String },
    Observe {
        session: SessionId,
        id: TargetId,
        threshold: Threshold,
    },
    Unobserve { session: SessionId, id: TargetId },
    /// Add or remove `class` on the element
    Mark {
        id: TargetId,
        class: String,
        visible: bool,
    },
    /// Add `class` to every element carrying `tag`, watched or not
    RevealAll { tag: String, class: String },
    /// Drop every observer the page still holds
    Disconnect,
}

/// Page to host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BridgeEvent {
    Discovered {
        targets: Vec<TargetId>,
        /// Whether the page exposes a viewport-intersection primitive
        intersection: bool,
    },
    Batch {
        session: SessionId,
        entries: Vec<Intersection>,
    },
}

impl BridgeEvent {
    pub fn decode(value: serde_json::Value) -> RevealResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// The intersection batch carried by this event, if any.
    pub fn into_batch(self) -> Option<EventBatch> {
        match self {
            BridgeEvent::Batch { session, entries } => Some(EventBatch::new(session, entries)),
            BridgeEvent::Discovered { .. } => None,
        }
    }
}

impl BridgeCommand {
    pub fn encode(&self) -> RevealResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
