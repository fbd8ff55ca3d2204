//! Reveal controller: owns the observation session of one mounted view.

use tracing::{debug, info, warn};

use super::host::{IntersectionPrimitive, RenderSurface};
use super::reducer::Effect;
use super::session::ObservationSession;
use super::types::{EventBatch, RevealOptions, SessionId, TargetId};
use crate::error::{RevealError, RevealResult};

/// Drives the reveal effect for one mounted view.
///
/// Holds at most one live [`ObservationSession`]. Starting a new session
/// stops the previous one first, and dropping the controller releases every
/// watch it still holds. When constructed without an intersection primitive
/// the controller degrades: targets are marked visible at `start` and never
/// observed.
///
/// # Example
///
/// ```ignore
/// let mut controller = RevealController::new(surface, Some(observer));
///
/// // After the first render has been committed:
/// let session = controller.mount("reveal", RevealOptions::default());
///
/// // For every batch the host delivers:
/// controller.handle_batch(&batch);
///
/// // Before the view goes away:
/// controller.stop(session);
/// ```
pub struct RevealController<S: RenderSurface, P: IntersectionPrimitive> {
    surface: S,
    primitive: Option<P>,
    session: Option<ObservationSession>,
    last_id: SessionId,
}

impl<S: RenderSurface, P: IntersectionPrimitive> RevealController<S, P> {
    pub fn new(surface: S, primitive: Option<P>) -> Self {
        Self {
            surface,
            primitive,
            session: None,
            last_id: SessionId::new(0),
        }
    }

    /// Continue session numbering after `last`, so ids handed out by this
    /// controller never collide with those of a controller it replaces.
    pub fn starting_after(mut self, last: SessionId) -> Self {
        self.last_id = last;
        self
    }

    /// Id of the most recently started session, or the seed if none started.
    pub fn last_session_id(&self) -> SessionId {
        self.last_id
    }

    /// Whether the host provides a viewport-intersection primitive.
    pub fn has_primitive(&self) -> bool {
        self.primitive.is_some()
    }

    /// Discover tagged targets on the surface and start a session over them.
    ///
    /// Must run after the initial render has been committed. Discovery before
    /// paint finds nothing and yields an empty session.
    pub fn mount(&mut self, tag: &str, options: RevealOptions) -> SessionId {
        let targets = self.surface.find_tagged(tag);
        if targets.is_empty() {
            warn!(tag, "No reveal targets found; discovery may have run before render");
        } else {
            debug!(tag, count = targets.len(), "Discovered reveal targets");
        }
        self.start(targets, options)
    }

    /// Start observing `targets`. Any active session is stopped first.
    ///
    /// Returns immediately; markers only change when batches arrive, except in
    /// degraded mode where every target is marked visible right away.
    pub fn start(
        &mut self,
        targets: impl IntoIterator<Item = TargetId>,
        options: RevealOptions,
    ) -> SessionId {
        if let Some(previous) = self.active_session_id() {
            info!(session = %previous, "Replacing active reveal session");
            self.stop(previous);
        }

        let id = self.last_id.next();
        self.last_id = id;

        let session = match self.primitive.as_mut() {
            Some(primitive) => {
                let session = ObservationSession::new(id, options, targets);
                for target in session.watched() {
                    primitive.observe(id, target, options.threshold);
                }
                info!(
                    session = %id,
                    targets = session.watched_count(),
                    mode = %options.mode,
                    threshold = options.threshold.value(),
                    "Reveal session started"
                );
                session
            }
            None => {
                warn!(session = %id, "{}; revealing all targets", RevealError::MissingCapability);
                let session = ObservationSession::degraded(id, options, targets);
                for target in session.settled() {
                    self.surface.set_marker(target, true);
                }
                session
            }
        };

        self.session = Some(session);
        id
    }

    /// Release every watch held by `session`. Calling it again, or with an
    /// id that was already replaced, does nothing.
    pub fn stop(&mut self, session: SessionId) {
        if let Err(err) = self.try_stop(session) {
            debug!(%err, "Ignoring stop");
        }
    }

    fn try_stop(&mut self, id: SessionId) -> RevealResult<()> {
        let session = match self.session.as_mut() {
            Some(session) if session.id() == id => session,
            _ => return Err(RevealError::DoubleRelease(id)),
        };

        let released = session.release()?;
        if let Some(primitive) = self.primitive.as_mut() {
            for target in &released {
                primitive.unobserve(id, *target);
            }
        }
        info!(session = %id, released = released.len(), "Reveal session stopped");
        Ok(())
    }

    /// Stop whatever session is live. Used on the "before teardown" checkpoint.
    pub fn teardown(&mut self) {
        if let Some(id) = self.active_session_id() {
            self.stop(id);
        }
    }

    /// Apply one batch of intersection reports.
    ///
    /// Each entry is reduced independently. Entries for a session other than
    /// the live one, or for targets no longer watched, are discarded. Returns
    /// the number of entries that were applied.
    pub fn handle_batch(&mut self, batch: &EventBatch) -> usize {
        let Self {
            surface,
            primitive,
            session,
            ..
        } = self;

        let Some(session) = session.as_mut().filter(|s| s.id() == batch.session) else {
            debug!(
                session = %batch.session,
                entries = batch.entries.len(),
                "Discarding batch for inactive session"
            );
            return 0;
        };

        let mut applied = 0;
        for entry in &batch.entries {
            let effects = match session.apply(*entry) {
                Ok(effects) => effects,
                Err(err) => {
                    debug!(%err, "Discarding event");
                    continue;
                }
            };
            applied += 1;
            for effect in effects {
                match effect {
                    Effect::SetMarker(visible) => {
                        debug!(id = %entry.target, visible, "Reveal marker");
                        surface.set_marker(entry.target, visible);
                    }
                    Effect::Unobserve => {
                        if let Some(primitive) = primitive.as_mut() {
                            primitive.unobserve(batch.session, entry.target);
                        }
                    }
                }
            }
        }
        applied
    }

    /// The current (or most recently stopped) session.
    pub fn session(&self) -> Option<&ObservationSession> {
        self.session.as_ref()
    }

    pub fn active_session_id(&self) -> Option<SessionId> {
        self.session
            .as_ref()
            .filter(|s| s.is_active())
            .map(|s| s.id())
    }

    /// Whether `target` currently carries the visible marker according to the
    /// live session.
    pub fn is_visible(&self, target: TargetId) -> bool {
        self.session
            .as_ref()
            .filter(|s| s.is_active())
            .is_some_and(|s| s.state_of(target).is_visible())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn primitive(&self) -> Option<&P> {
        self.primitive.as_ref()
    }
}

impl<S: RenderSurface, P: IntersectionPrimitive> Drop for RevealController<S, P> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::types::{Intersection, RevealMode, Threshold};
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct FakeSurface {
        tagged: Vec<TargetId>,
        markers: BTreeMap<TargetId, bool>,
    }

    impl RenderSurface for FakeSurface {
        fn find_tagged(&mut self, _tag: &str) -> Vec<TargetId> {
            self.tagged.clone()
        }

        fn set_marker(&mut self, target: TargetId, visible: bool) {
            self.markers.insert(target, visible);
        }
    }

    #[derive(Default)]
    struct FakeObserver {
        observing: Vec<(SessionId, TargetId)>,
    }

    impl IntersectionPrimitive for FakeObserver {
        fn observe(&mut self, session: SessionId, target: TargetId, _threshold: Threshold) {
            self.observing.push((session, target));
        }

        fn unobserve(&mut self, session: SessionId, target: TargetId) {
            self.observing.retain(|entry| *entry != (session, target));
        }
    }

    fn t(raw: u32) -> TargetId {
        TargetId::new(raw)
    }

    #[test]
    fn start_observes_without_marking() {
        let mut controller = RevealController::new(FakeSurface::default(), Some(FakeObserver::default()));
        let id = controller.start([t(1), t(2)], RevealOptions::default());
        assert_eq!(controller.primitive().unwrap().observing.len(), 2);
        assert!(controller.surface().markers.is_empty());
        assert_eq!(controller.active_session_id(), Some(id));
    }

    #[test]
    fn restart_stops_previous_session() {
        let mut controller = RevealController::new(FakeSurface::default(), Some(FakeObserver::default()));
        let first = controller.start([t(1), t(2)], RevealOptions::default());
        let second = controller.start([t(1), t(2)], RevealOptions::default());
        assert_ne!(first, second);
        let observing = &controller.primitive().unwrap().observing;
        assert_eq!(observing.len(), 2);
        assert!(observing.iter().all(|(session, _)| *session == second));
    }

    #[test]
    fn mount_uses_surface_discovery() {
        let surface = FakeSurface {
            tagged: vec![t(3), t(4)],
            ..Default::default()
        };
        let mut controller = RevealController::new(surface, Some(FakeObserver::default()));
        controller.mount("reveal", RevealOptions::default());
        assert_eq!(controller.session().unwrap().watched_count(), 2);
    }

    #[test]
    fn batch_for_old_session_is_ignored() {
        let options = RevealOptions::default().with_mode(RevealMode::Toggle);
        let mut controller = RevealController::new(FakeSurface::default(), Some(FakeObserver::default()));
        let old = controller.start([t(1)], options);
        controller.start([t(1)], options);
        let applied = controller.handle_batch(&EventBatch::new(old, vec![Intersection::new(t(1), true)]));
        assert_eq!(applied, 0);
        assert!(controller.surface().markers.is_empty());
    }

    #[test]
    fn replacement_controller_continues_numbering() {
        let mut first = RevealController::new(FakeSurface::default(), Some(FakeObserver::default()));
        first.start([t(1)], RevealOptions::default());
        let before = first.start([t(1)], RevealOptions::default());
        assert_eq!(first.last_session_id(), before);

        let mut second = RevealController::new(FakeSurface::default(), Some(FakeObserver::default()))
            .starting_after(first.last_session_id());
        let after = second.start([t(1)], RevealOptions::default());
        assert_eq!(after, SessionId::new(3));
        assert!(after > before);
    }

    #[test]
    fn teardown_releases_watches() {
        let mut controller = RevealController::new(FakeSurface::default(), Some(FakeObserver::default()));
        controller.start([t(1)], RevealOptions::default());
        controller.teardown();
        assert!(controller.primitive().unwrap().observing.is_empty());
        assert_eq!(controller.active_session_id(), None);
    }

    #[test]
    fn degraded_marks_everything_visible() {
        let mut controller: RevealController<FakeSurface, FakeObserver> =
            RevealController::new(FakeSurface::default(), None);
        controller.start([t(1), t(2)], RevealOptions::default());
        assert!(!controller.has_primitive());
        assert_eq!(controller.surface().markers.get(&t(1)), Some(&true));
        assert_eq!(controller.surface().markers.get(&t(2)), Some(&true));
        assert!(controller.is_visible(t(1)));
        assert!(controller.session().unwrap().is_degraded());
    }
}
