//! Message-passing delivery of intersection batches.
//!
//! The host pushes [`EventBatch`]es into an [`EventSender`]; the view owning
//! the controller drains the matching [`EventReceiver`]. Sending never blocks
//! and a closed receiver simply drops batches.

use tokio::sync::mpsc;
use tracing::debug;

use super::controller::RevealController;
use super::host::{IntersectionPrimitive, RenderSurface};
use super::types::EventBatch;

/// Producer side, cloned freely by the host.
#[derive(Debug, Clone)]
pub struct EventSender(mpsc::UnboundedSender<EventBatch>);

impl EventSender {
    /// Queue a batch. Returns `false` if the receiving view is gone.
    pub fn send(&self, batch: EventBatch) -> bool {
        match self.0.send(batch) {
            Ok(()) => true,
            Err(mpsc::error::SendError(batch)) => {
                debug!(session = %batch.session, "Reveal receiver closed; dropping batch");
                false
            }
        }
    }
}

/// Consumer side, owned by the view.
#[derive(Debug)]
pub struct EventReceiver(mpsc::UnboundedReceiver<EventBatch>);

impl EventReceiver {
    pub async fn recv(&mut self) -> Option<EventBatch> {
        self.0.recv().await
    }

    pub fn try_recv(&mut self) -> Option<EventBatch> {
        self.0.try_recv().ok()
    }

    pub fn close(&mut self) {
        self.0.close();
    }
}

/// Create a linked sender/receiver pair.
pub fn event_channel() -> (EventSender, EventReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSender(tx), EventReceiver(rx))
}

impl<S: RenderSurface, P: IntersectionPrimitive> RevealController<S, P> {
    /// Apply every batch already queued, without waiting for more.
    /// Returns the number of entries applied.
    pub fn drain(&mut self, events: &mut EventReceiver) -> usize {
        let mut applied = 0;
        while let Some(batch) = events.try_recv() {
            applied += self.handle_batch(&batch);
        }
        applied
    }

    /// Apply batches as they arrive until every sender is dropped.
    pub async fn run(&mut self, events: &mut EventReceiver) -> usize {
        let mut applied = 0;
        while let Some(batch) = events.recv().await {
            applied += self.handle_batch(&batch);
        }
        applied
    }
}
