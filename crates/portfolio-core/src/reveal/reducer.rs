//! Pure per-target transition function.
//!
//! The controller feeds every intersection report through [`reduce`] and then
//! applies the returned effects to the surface and the intersection primitive.
//! Keeping this free of side effects lets the state machine be tested without
//! a viewport.

use super::types::{RevealMode, TargetState};

/// A side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Apply (`true`) or remove (`false`) the visible marker
    SetMarker(bool),
    /// Stop observing the target
    Unobserve,
}

/// Result of reducing one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: TargetState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: TargetState) -> Self {
        Self {
            next: state,
            effects: Vec::new(),
        }
    }
}

/// Compute the next state of a target for one intersection report.
///
/// Targets that are not watched (`Unobserved`, `Unwatched`) ignore events.
/// Markers are only emitted on an actual change of visibility.
pub fn reduce(state: TargetState, intersecting: bool, mode: RevealMode) -> Transition {
    if !state.is_watched() {
        return Transition::unchanged(state);
    }

    match (mode, intersecting) {
        (RevealMode::Once, true) => {
            let mut effects = Vec::with_capacity(2);
            if !state.is_visible() {
                effects.push(Effect::SetMarker(true));
            }
            effects.push(Effect::Unobserve);
            Transition {
                next: TargetState::Unwatched,
                effects,
            }
        }
        // Once mode waits for the first intersection; nothing to hide.
        (RevealMode::Once, false) => Transition::unchanged(state),
        (RevealMode::Toggle, true) => {
            if state == TargetState::Visible {
                Transition::unchanged(state)
            } else {
                Transition {
                    next: TargetState::Visible,
                    effects: vec![Effect::SetMarker(true)],
                }
            }
        }
        (RevealMode::Toggle, false) => match state {
            TargetState::Visible => Transition {
                next: TargetState::NotVisible,
                effects: vec![Effect::SetMarker(false)],
            },
            // Never shown yet: record the state, the marker is already off.
            _ => Transition {
                next: TargetState::NotVisible,
                effects: Vec::new(),
            },
        },
    }
}
