//! Identity, option and event types for the reveal controller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RevealError, RevealResult};

/// Stable identity of a reveal target, assigned by the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetId(u32);

impl TargetId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Generation number of an observation session.
///
/// Each `start` on a controller allocates the next id, so a batch tagged with
/// an older id can always be told apart from live traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    pub(crate) fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a target reacts after it first intersects the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealMode {
    /// Visible while intersecting, hidden again when it leaves (replayable)
    Toggle,
    /// Visible on first intersection, then never observed again
    #[default]
    Once,
}

impl RevealMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RevealMode::Toggle => "toggle",
            RevealMode::Once => "once",
        }
    }
}

impl fmt::Display for RevealMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RevealMode {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "toggle" => Ok(RevealMode::Toggle),
            "once" => Ok(RevealMode::Once),
            _ => Err(RevealError::InvalidMode(s.to_string())),
        }
    }
}

/// Fraction of a target's area that must be inside the viewport to count as
/// intersecting. Always within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Threshold(f32);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(0.1);

    pub fn new(value: f32) -> RevealResult<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RevealError::InvalidThreshold(value.to_string()))
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Threshold {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value: f32 = s
            .parse()
            .map_err(|_| RevealError::InvalidThreshold(s.to_string()))?;
        Threshold::new(value)
    }
}

/// Options for one observation session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealOptions {
    pub threshold: Threshold,
    pub mode: RevealMode,
}

impl RevealOptions {
    pub fn new(threshold: Threshold, mode: RevealMode) -> Self {
        Self { threshold, mode }
    }

    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_mode(mut self, mode: RevealMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Per-target lifecycle.
///
/// ```text
/// toggle: Unobserved -> Watched -> {Visible <-> NotVisible}
/// once:   Unobserved -> Watched -> Visible -> Unwatched (terminal)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetState {
    #[default]
    Unobserved,
    Watched,
    Visible,
    NotVisible,
    Unwatched,
}

impl TargetState {
    /// Whether the "visible" marker is applied in this state.
    ///
    /// `Unwatched` is only reached through `Visible` in once mode, so the
    /// marker stays on.
    pub fn is_visible(&self) -> bool {
        matches!(self, TargetState::Visible | TargetState::Unwatched)
    }

    /// Whether the target still receives intersection events.
    pub fn is_watched(&self) -> bool {
        matches!(
            self,
            TargetState::Watched | TargetState::Visible | TargetState::NotVisible
        )
    }
}

/// One intersection report for a single target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intersection {
    #[serde(rename = "id")]
    pub target: TargetId,
    pub intersecting: bool,
}

impl Intersection {
    pub fn new(target: TargetId, intersecting: bool) -> Self {
        Self {
            target,
            intersecting,
        }
    }
}

/// A batch of intersection reports delivered together by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBatch {
    pub session: SessionId,
    pub entries: Vec<Intersection>,
}

impl EventBatch {
    pub fn new(session: SessionId, entries: Vec<Intersection>) -> Self {
        Self { session, entries }
    }
}
