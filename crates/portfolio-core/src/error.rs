//! Error types for the portfolio reveal core

use thiserror::Error;

use crate::reveal::{SessionId, TargetId};

/// Errors raised by the reveal controller and its configuration.
///
/// `MissingCapability`, `DoubleRelease` and `StaleEvent` never reach callers of
/// [`RevealController`](crate::reveal::RevealController): the controller logs
/// them and falls back. They exist so the absorbing code paths stay explicit.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RevealError {
    /// The host has no viewport-intersection primitive
    #[error("Viewport intersection primitive unavailable")]
    MissingCapability,

    /// `stop` was called on a session that is already stopped
    #[error("Session {0} already released")]
    DoubleRelease(SessionId),

    /// An intersection event arrived for a target that is no longer watched
    #[error("Stale event for target {target} in session {session}")]
    StaleEvent {
        session: SessionId,
        target: TargetId,
    },

    /// Threshold outside of 0.0..=1.0, NaN, or not a number at all
    #[error("Invalid threshold: {0} (expected 0.0..=1.0)")]
    InvalidThreshold(String),

    /// Unknown reveal mode name
    #[error("Invalid reveal mode: {0} (expected \"toggle\" or \"once\")")]
    InvalidMode(String),

    /// Host bridge failed to deliver or decode a message
    #[error("Bridge error: {0}")]
    Bridge(String),
}

impl From<serde_json::Error> for RevealError {
    fn from(err: serde_json::Error) -> Self {
        RevealError::Bridge(err.to_string())
    }
}

/// Result type alias using RevealError
pub type RevealResult<T> = Result<T, RevealError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RevealError::DoubleRelease(SessionId::new(3));
        assert_eq!(format!("{}", err), "Session #3 already released");

        let err = RevealError::StaleEvent {
            session: SessionId::new(1),
            target: TargetId::new(7),
        };
        assert_eq!(format!("{}", err), "Stale event for target t7 in session #1");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: RevealError = json_err.into();
        assert!(matches!(err, RevealError::Bridge(_)));
    }
}
