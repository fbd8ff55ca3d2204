//! Observation session: the live binding between a controller and the
//! targets it currently watches.

use std::collections::{BTreeMap, BTreeSet};

use super::reducer::{reduce, Effect};
use super::types::{Intersection, RevealOptions, SessionId, TargetId, TargetState};
use crate::error::{RevealError, RevealResult};

/// Live watcher state owned by a [`RevealController`](super::RevealController).
///
/// Targets are either pending (in `watched`, still receiving events) or
/// settled (revealed in once mode and no longer observed). A released session
/// holds neither.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSession {
    id: SessionId,
    options: RevealOptions,
    watched: BTreeMap<TargetId, TargetState>,
    settled: BTreeSet<TargetId>,
    active: bool,
    degraded: bool,
}

impl ObservationSession {
    /// Register every target as `Watched`. Duplicate ids collapse to one entry.
    pub(crate) fn new(
        id: SessionId,
        options: RevealOptions,
        targets: impl IntoIterator<Item = TargetId>,
    ) -> Self {
        let watched = targets
            .into_iter()
            .map(|target| (target, TargetState::Watched))
            .collect();
        Self {
            id,
            options,
            watched,
            settled: BTreeSet::new(),
            active: true,
            degraded: false,
        }
    }

    /// Session used when the host cannot report intersections: every target
    /// is settled as visible and nothing is watched.
    pub(crate) fn degraded(
        id: SessionId,
        options: RevealOptions,
        targets: impl IntoIterator<Item = TargetId>,
    ) -> Self {
        Self {
            id,
            options,
            watched: BTreeMap::new(),
            settled: targets.into_iter().collect(),
            active: true,
            degraded: true,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True when the session was started without an intersection primitive.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }

    pub fn settled_count(&self) -> usize {
        self.settled.len()
    }

    /// Targets still receiving events, in id order.
    pub fn watched(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.watched.keys().copied()
    }

    /// Targets revealed for good, in id order.
    pub fn settled(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.settled.iter().copied()
    }

    /// Current state of `target` as seen by this session.
    pub fn state_of(&self, target: TargetId) -> TargetState {
        if let Some(state) = self.watched.get(&target) {
            *state
        } else if self.settled.contains(&target) {
            TargetState::Unwatched
        } else {
            TargetState::Unobserved
        }
    }

    /// Reduce one report and return the effects to apply.
    ///
    /// Reports for targets that are not watched (never registered, already
    /// settled, or released with the session) yield `StaleEvent`.
    pub(crate) fn apply(&mut self, entry: Intersection) -> RevealResult<Vec<Effect>> {
        let stale = RevealError::StaleEvent {
            session: self.id,
            target: entry.target,
        };
        if !self.active {
            return Err(stale);
        }
        let Some(state) = self.watched.get(&entry.target).copied() else {
            return Err(stale);
        };

        let transition = reduce(state, entry.intersecting, self.options.mode);
        if transition.next.is_watched() {
            self.watched.insert(entry.target, transition.next);
        } else {
            self.watched.remove(&entry.target);
            self.settled.insert(entry.target);
        }
        Ok(transition.effects)
    }

    /// Deactivate the session and return the targets whose watches must be
    /// released. A second call yields `DoubleRelease`.
    pub(crate) fn release(&mut self) -> RevealResult<Vec<TargetId>> {
        if !self.active {
            return Err(RevealError::DoubleRelease(self.id));
        }
        self.active = false;
        self.settled.clear();
        let released = std::mem::take(&mut self.watched).into_keys().collect();
        Ok(released)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::types::RevealMode;

    fn ids(raw: &[u32]) -> Vec<TargetId> {
        raw.iter().copied().map(TargetId::new).collect()
    }

    #[test]
    fn duplicates_register_once() {
        let session =
            ObservationSession::new(SessionId::new(1), RevealOptions::default(), ids(&[1, 2, 1]));
        assert_eq!(session.watched_count(), 2);
    }

    #[test]
    fn once_moves_target_to_settled() {
        let mut session =
            ObservationSession::new(SessionId::new(1), RevealOptions::default(), ids(&[1, 2]));
        let effects = session
            .apply(Intersection::new(TargetId::new(1), true))
            .unwrap();
        assert_eq!(effects, vec![Effect::SetMarker(true), Effect::Unobserve]);
        assert_eq!(session.state_of(TargetId::new(1)), TargetState::Unwatched);
        assert_eq!(session.watched().collect::<Vec<_>>(), ids(&[2]));
        assert_eq!(session.settled().collect::<Vec<_>>(), ids(&[1]));
    }

    #[test]
    fn settled_target_is_stale() {
        let mut session =
            ObservationSession::new(SessionId::new(1), RevealOptions::default(), ids(&[1]));
        session.apply(Intersection::new(TargetId::new(1), true)).unwrap();
        let err = session
            .apply(Intersection::new(TargetId::new(1), false))
            .unwrap_err();
        assert!(matches!(err, RevealError::StaleEvent { .. }));
    }

    #[test]
    fn toggle_keeps_target_watched() {
        let options = RevealOptions::default().with_mode(RevealMode::Toggle);
        let mut session = ObservationSession::new(SessionId::new(1), options, ids(&[4]));
        session.apply(Intersection::new(TargetId::new(4), true)).unwrap();
        assert_eq!(session.state_of(TargetId::new(4)), TargetState::Visible);
        session.apply(Intersection::new(TargetId::new(4), false)).unwrap();
        assert_eq!(session.state_of(TargetId::new(4)), TargetState::NotVisible);
        assert_eq!(session.watched_count(), 1);
    }

    #[test]
    fn release_empties_and_rejects_second_call() {
        let mut session =
            ObservationSession::new(SessionId::new(2), RevealOptions::default(), ids(&[1, 2, 3]));
        let released = session.release().unwrap();
        assert_eq!(released, ids(&[1, 2, 3]));
        assert!(!session.is_active());
        assert_eq!(session.watched_count(), 0);
        assert_eq!(session.settled_count(), 0);
        assert_eq!(
            session.release().unwrap_err(),
            RevealError::DoubleRelease(SessionId::new(2))
        );
    }

    #[test]
    fn degraded_settles_everything() {
        let session = ObservationSession::degraded(
            SessionId::new(1),
            RevealOptions::default(),
            ids(&[1, 2]),
        );
        assert!(session.is_degraded());
        assert!(session.is_active());
        assert_eq!(session.watched_count(), 0);
        assert!(session.state_of(TargetId::new(2)).is_visible());
    }
}
