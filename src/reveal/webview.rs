//! Webview implementations of the reveal host capabilities.
//!
//! Neither type touches the page directly: both queue [`BridgeCommand`]s in a
//! shared outbox that the bridge flushes through `document::eval` after each
//! controller call.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_core::reveal::VISIBLE_MARKER;
use portfolio_core::{
    BridgeCommand, IntersectionPrimitive, RenderSurface, SessionId, TargetId, Threshold,
};

/// Commands waiting to be sent to the page.
pub type Outbox = Rc<RefCell<Vec<BridgeCommand>>>;

/// Render surface backed by the ids the page reported at discovery.
pub struct WebviewSurface {
    outbox: Outbox,
    discovered: Vec<TargetId>,
}

impl WebviewSurface {
    pub fn new(outbox: Outbox, discovered: Vec<TargetId>) -> Self {
        Self { outbox, discovered }
    }
}

impl RenderSurface for WebviewSurface {
    // The page already ran the tag query after its first frame.
    fn find_tagged(&mut self, _tag: &str) -> Vec<TargetId> {
        self.discovered.clone()
    }

    fn set_marker(&mut self, target: TargetId, visible: bool) {
        self.outbox.borrow_mut().push(BridgeCommand::Mark {
            id: target,
            class: VISIBLE_MARKER.to_string(),
            visible,
        });
    }
}

/// IntersectionObserver in the page, driven by command.
pub struct WebviewObserver {
    outbox: Outbox,
}

impl WebviewObserver {
    pub fn new(outbox: Outbox) -> Self {
        Self { outbox }
    }
}

impl IntersectionPrimitive for WebviewObserver {
    fn observe(&mut self, session: SessionId, target: TargetId, threshold: Threshold) {
        self.outbox.borrow_mut().push(BridgeCommand::Observe {
            session,
            id: target,
            threshold,
        });
    }

    fn unobserve(&mut self, session: SessionId, target: TargetId) {
        self.outbox
            .borrow_mut()
            .push(BridgeCommand::Unobserve { session, id: target });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{EventBatch, Intersection, RevealController, RevealOptions};

    fn outbox() -> Outbox {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn mount_queues_observe_commands() {
        let out = outbox();
        let surface = WebviewSurface::new(out.clone(), vec![TargetId::new(0), TargetId::new(1)]);
        let mut controller = RevealController::new(surface, Some(WebviewObserver::new(out.clone())));
        let session = controller.mount("reveal", RevealOptions::default());

        let queued = out.borrow_mut().drain(..).collect::<Vec<_>>();
        assert_eq!(
            queued,
            vec![
                BridgeCommand::Observe {
                    session,
                    id: TargetId::new(0),
                    threshold: Threshold::default(),
                },
                BridgeCommand::Observe {
                    session,
                    id: TargetId::new(1),
                    threshold: Threshold::default(),
                },
            ]
        );
    }

    #[test]
    fn reveal_queues_mark_then_unobserve() {
        let out = outbox();
        let surface = WebviewSurface::new(out.clone(), vec![TargetId::new(4)]);
        let mut controller = RevealController::new(surface, Some(WebviewObserver::new(out.clone())));
        let session = controller.mount("reveal", RevealOptions::default());
        out.borrow_mut().clear();

        controller.handle_batch(&EventBatch::new(
            session,
            vec![Intersection::new(TargetId::new(4), true)],
        ));

        assert_eq!(
            *out.borrow(),
            vec![
                BridgeCommand::Mark {
                    id: TargetId::new(4),
                    class: VISIBLE_MARKER.to_string(),
                    visible: true,
                },
                BridgeCommand::Unobserve {
                    session,
                    id: TargetId::new(4),
                },
            ]
        );
    }

    #[test]
    fn missing_observer_marks_all_visible() {
        let out = outbox();
        let surface = WebviewSurface::new(out.clone(), vec![TargetId::new(0), TargetId::new(1)]);
        let mut controller: RevealController<WebviewSurface, WebviewObserver> =
            RevealController::new(surface, None);
        controller.mount("reveal", RevealOptions::default());

        let marks = out
            .borrow()
            .iter()
            .filter(|cmd| matches!(cmd, BridgeCommand::Mark { visible: true, .. }))
            .count();
        assert_eq!(marks, 2);
    }

    #[test]
    fn dropping_controller_queues_unobserve() {
        let out = outbox();
        let surface = WebviewSurface::new(out.clone(), vec![TargetId::new(0)]);
        let mut controller = RevealController::new(surface, Some(WebviewObserver::new(out.clone())));
        controller.mount("reveal", RevealOptions::default());
        out.borrow_mut().clear();

        drop(controller);

        assert!(matches!(
            out.borrow().as_slice(),
            [BridgeCommand::Unobserve { .. }]
        ));
    }
}
