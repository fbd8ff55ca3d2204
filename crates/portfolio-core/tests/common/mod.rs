//! Recording host fakes shared by the integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use portfolio_core::{IntersectionPrimitive, RenderSurface, SessionId, TargetId, Threshold};

/// Surface with a fixed set of tagged elements that records marker changes.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub tagged: Vec<TargetId>,
    pub markers: BTreeMap<TargetId, bool>,
    pub marker_writes: usize,
    pub queries: Vec<String>,
}

impl RecordingSurface {
    pub fn with_targets(ids: &[u32]) -> Self {
        Self {
            tagged: ids.iter().copied().map(TargetId::new).collect(),
            ..Default::default()
        }
    }

    pub fn marker(&self, id: u32) -> Option<bool> {
        self.markers.get(&TargetId::new(id)).copied()
    }
}

impl RenderSurface for RecordingSurface {
    fn find_tagged(&mut self, tag: &str) -> Vec<TargetId> {
        self.queries.push(tag.to_string());
        self.tagged.clone()
    }

    fn set_marker(&mut self, target: TargetId, visible: bool) {
        self.marker_writes += 1;
        self.markers.insert(target, visible);
    }
}

/// Intersection primitive that tracks live watches per session.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub live: BTreeSet<(SessionId, TargetId)>,
    pub observe_calls: usize,
    pub unobserve_calls: usize,
    pub last_threshold: Option<Threshold>,
}

impl RecordingObserver {
    pub fn watching(&self, id: u32) -> bool {
        self.live.iter().any(|(_, target)| *target == TargetId::new(id))
    }
}

impl IntersectionPrimitive for RecordingObserver {
    fn observe(&mut self, session: SessionId, target: TargetId, threshold: Threshold) {
        self.observe_calls += 1;
        self.last_threshold = Some(threshold);
        self.live.insert((session, target));
    }

    fn unobserve(&mut self, session: SessionId, target: TargetId) {
        self.unobserve_calls += 1;
        self.live.remove(&(session, target));
    }
}

/// Route controller logs to the test harness output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("portfolio_core=debug")
        .try_init();
}

pub fn t(raw: u32) -> TargetId {
    TargetId::new(raw)
}
