//! Reveal bridge between the Dioxus tree and the page script.
//!
//! ```text
//! use_effect (after first render)
//!   └── run_bridge ── discover ──► reveal.js ── requestAnimationFrame, query .reveal
//!                  ◄── discovered ─┘
//!        RevealController::mount ── observe ──► IntersectionObserver
//!                  ◄── batch ───────────────────┘
//!        EventSender → drain → mark / unobserve ──► classList
//! use_drop
//!   └── teardown: stop session, unobserve, disconnect
//! run_bridge error
//!   └── fail_open: teardown, then reveal_all through a fresh script
//! ```

mod webview;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use dioxus::document::{self, Eval};
use dioxus::prelude::*;
use portfolio_core::reveal::VISIBLE_MARKER;
use portfolio_core::{
    event_channel, BridgeCommand, BridgeEvent, EventReceiver, EventSender, RevealController,
    RevealError, SessionId, TargetId,
};

use crate::context::RevealConfig;
use webview::{Outbox, WebviewObserver, WebviewSurface};

const REVEAL_SCRIPT: &str = include_str!("reveal.js");

type WebviewController = RevealController<WebviewSurface, WebviewObserver>;

/// Per-view bridge state. One instance per mounted `use_reveal` caller.
struct RevealBridge {
    eval: Option<Eval>,
    outbox: Outbox,
    controller: Option<WebviewController>,
    /// Last session id handed out by any controller of this bridge
    last_session: SessionId,
    /// Generation of the bridge loop currently driving the page
    run: u64,
    events_tx: EventSender,
    events_rx: EventReceiver,
}

impl RevealBridge {
    fn new() -> Self {
        let (events_tx, events_rx) = event_channel();
        Self {
            eval: None,
            outbox: Rc::new(RefCell::new(Vec::new())),
            controller: None,
            last_session: SessionId::new(0),
            run: 0,
            events_tx,
            events_rx,
        }
    }

    fn queue(&self, command: BridgeCommand) {
        self.outbox.borrow_mut().push(command);
    }

    fn take_queued(&self) -> Vec<BridgeCommand> {
        self.outbox.borrow_mut().drain(..).collect()
    }

    /// Send every queued command to the page. With no page script attached
    /// the queue is dropped.
    fn flush(&self) -> anyhow::Result<()> {
        let commands = self.take_queued();
        match self.eval.as_ref() {
            Some(eval) => send_all(eval, commands),
            None => Ok(()),
        }
    }

    /// Stop the current controller and remember where its numbering ended.
    fn retire_controller(&mut self) {
        if let Some(mut controller) = self.controller.take() {
            controller.teardown();
            self.last_session = controller.last_session_id();
        }
    }

    /// Page finished its post-render discovery: build a controller over what
    /// it found. An older controller is retired first, and the new one
    /// continues its session numbering so the page never sees an id twice.
    fn on_discovered(
        &mut self,
        targets: Vec<TargetId>,
        intersection: bool,
        config: &RevealConfig,
    ) -> anyhow::Result<()> {
        self.retire_controller();
        let surface = WebviewSurface::new(self.outbox.clone(), targets);
        let observer = intersection.then(|| WebviewObserver::new(self.outbox.clone()));
        let controller = RevealController::new(surface, observer).starting_after(self.last_session);
        self.controller
            .insert(controller)
            .mount(&config.tag, config.options);
        self.flush()
    }

    fn pump(&mut self) -> anyhow::Result<()> {
        if let Some(controller) = self.controller.as_mut() {
            controller.drain(&mut self.events_rx);
        }
        self.flush()
    }

    /// Commands that release everything held in the page, in send order:
    /// the live session's unobserves, then a disconnect.
    fn teardown_commands(&mut self) -> Vec<BridgeCommand> {
        self.retire_controller();
        let mut commands = self.take_queued();
        commands.push(BridgeCommand::Disconnect);
        commands
    }

    /// "Before teardown" checkpoint.
    fn teardown(&mut self) {
        let commands = self.teardown_commands();
        if let Some(eval) = self.eval.take() {
            if let Err(e) = send_all(&eval, commands) {
                tracing::debug!("Reveal teardown send failed: {:#}", e);
            }
        }
    }

    /// Replace whatever a previous run set up and return the new run's
    /// generation.
    fn begin_run(&mut self) -> u64 {
        self.teardown();
        self.run += 1;
        self.run
    }

    /// Commands that leave every tagged element visible once `run` has
    /// failed. Empty if a newer run has already taken over the page.
    fn fail_open(&mut self, run: u64, config: &RevealConfig) -> Vec<BridgeCommand> {
        if run != self.run {
            return Vec::new();
        }
        self.teardown();
        vec![
            BridgeCommand::RevealAll {
                tag: config.tag.clone(),
                class: VISIBLE_MARKER.to_string(),
            },
            BridgeCommand::Disconnect,
        ]
    }
}

fn send_all(eval: &Eval, commands: Vec<BridgeCommand>) -> anyhow::Result<()> {
    for command in commands {
        eval.send(command.encode()?)
            .map_err(|e| RevealError::Bridge(format!("{e:?}")))?;
    }
    Ok(())
}

async fn run_bridge(bridge: Rc<RefCell<RevealBridge>>, config: &RevealConfig) -> anyhow::Result<()> {
    let mut eval = document::eval(REVEAL_SCRIPT);
    let events_tx = {
        let mut state = bridge.borrow_mut();
        state.eval = Some(eval);
        state.queue(BridgeCommand::Discover {
            tag: config.tag.clone(),
        });
        state.flush().context("failed to request discovery")?;
        state.events_tx.clone()
    };

    loop {
        let value: serde_json::Value = eval
            .recv()
            .await
            .map_err(|e| RevealError::Bridge(format!("{e:?}")))
            .context("page script stopped")?;

        let event = match BridgeEvent::decode(value) {
            Ok(event) => event,
            Err(e) => {
                tracing::debug!("Ignoring page message: {}", e);
                continue;
            }
        };

        match event {
            BridgeEvent::Discovered {
                targets,
                intersection,
            } => {
                tracing::debug!(count = targets.len(), intersection, "Page discovery finished");
                bridge
                    .borrow_mut()
                    .on_discovered(targets, intersection, config)?;
            }
            event => {
                if let Some(batch) = event.into_batch() {
                    events_tx.send(batch);
                    bridge.borrow_mut().pump()?;
                }
            }
        }
    }
}

/// A failed run must not leave content hidden: reveal every tagged element
/// through a fresh page script.
fn reveal_everything(bridge: &RefCell<RevealBridge>, run: u64, config: &RevealConfig, err: anyhow::Error) {
    let commands = bridge.borrow_mut().fail_open(run, config);
    if commands.is_empty() {
        tracing::debug!("Superseded reveal bridge stopped: {:#}", err);
        return;
    }
    tracing::warn!("Reveal bridge stopped, revealing all targets: {:#}", err);
    if let Err(e) = send_all(&document::eval(REVEAL_SCRIPT), commands) {
        tracing::warn!("Reveal fallback failed: {:#}", e);
    }
}

/// Run the scroll reveal effect for the calling component's subtree.
///
/// Discovery is requested from `use_effect`, i.e. after the first render has
/// been committed, and the page waits one more animation frame before
/// querying. Everything is released when the component unmounts.
///
/// # Example
///
/// ```ignore
/// #[component]
/// fn App() -> Element {
///     use_reveal(RevealConfig::default());
///     rsx! { section { class: "reveal", "..." } }
/// }
/// ```
pub fn use_reveal(config: RevealConfig) {
    let bridge = use_hook(|| Rc::new(RefCell::new(RevealBridge::new())));

    let effect_bridge = bridge.clone();
    use_effect(move || {
        let bridge = effect_bridge.clone();
        let config = config.clone();
        spawn(async move {
            let run = bridge.borrow_mut().begin_run();
            if let Err(e) = run_bridge(bridge.clone(), &config).await {
                reveal_everything(&bridge, run, &config, e);
            }
        });
    });

    use_drop(move || bridge.borrow_mut().teardown());
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{EventBatch, Intersection};

    fn ids(raw: &[u32]) -> Vec<TargetId> {
        raw.iter().copied().map(TargetId::new).collect()
    }

    fn active_session(bridge: &RevealBridge) -> Option<SessionId> {
        bridge.controller.as_ref()?.active_session_id()
    }

    #[test]
    fn flush_without_page_drops_queue() {
        let bridge = RevealBridge::new();
        bridge.queue(BridgeCommand::Disconnect);
        assert!(bridge.flush().is_ok());
        assert!(bridge.outbox.borrow().is_empty());
    }

    #[test]
    fn teardown_unobserves_then_disconnects() {
        let mut bridge = RevealBridge::new();
        bridge
            .on_discovered(ids(&[0, 1]), true, &RevealConfig::default())
            .unwrap();
        let session = active_session(&bridge).unwrap();

        assert_eq!(
            bridge.teardown_commands(),
            vec![
                BridgeCommand::Unobserve {
                    session,
                    id: TargetId::new(0),
                },
                BridgeCommand::Unobserve {
                    session,
                    id: TargetId::new(1),
                },
                BridgeCommand::Disconnect,
            ]
        );
        assert!(bridge.controller.is_none());
        assert!(bridge.eval.is_none());
    }

    #[test]
    fn discovery_without_intersection_degrades() {
        let mut bridge = RevealBridge::new();
        bridge
            .on_discovered(ids(&[0, 1, 2]), false, &RevealConfig::default())
            .unwrap();

        let controller = bridge.controller.as_ref().unwrap();
        assert!(!controller.has_primitive());
        assert!(controller.session().unwrap().is_degraded());
        assert!(ids(&[0, 1, 2]).into_iter().all(|id| controller.is_visible(id)));
    }

    #[test]
    fn rediscovery_keeps_session_ids_increasing() {
        let config = RevealConfig::default();
        let mut bridge = RevealBridge::new();
        bridge.on_discovered(ids(&[0]), true, &config).unwrap();
        let first = active_session(&bridge).unwrap();
        bridge.on_discovered(ids(&[0, 1]), true, &config).unwrap();
        let second = active_session(&bridge).unwrap();
        assert!(second > first);

        // A later run continues from where the torn down controller stopped.
        bridge.begin_run();
        bridge.on_discovered(ids(&[0]), true, &config).unwrap();
        assert!(active_session(&bridge).unwrap() > second);
    }

    #[test]
    fn pump_applies_queued_batches() {
        let mut bridge = RevealBridge::new();
        bridge
            .on_discovered(ids(&[3]), true, &RevealConfig::default())
            .unwrap();
        let session = active_session(&bridge).unwrap();

        assert!(bridge.events_tx.send(EventBatch::new(
            session,
            vec![Intersection::new(TargetId::new(3), true)],
        )));
        bridge.pump().unwrap();

        assert!(bridge.controller.as_ref().unwrap().is_visible(TargetId::new(3)));
    }

    #[test]
    fn failed_run_reveals_every_target() {
        let config = RevealConfig::default();
        let mut bridge = RevealBridge::new();
        let run = bridge.begin_run();
        bridge.on_discovered(ids(&[0, 1]), true, &config).unwrap();

        assert_eq!(
            bridge.fail_open(run, &config),
            vec![
                BridgeCommand::RevealAll {
                    tag: config.tag.clone(),
                    class: VISIBLE_MARKER.to_string(),
                },
                BridgeCommand::Disconnect,
            ]
        );
        assert!(bridge.controller.is_none());
    }

    #[test]
    fn superseded_run_leaves_page_alone() {
        let config = RevealConfig::default();
        let mut bridge = RevealBridge::new();
        let old = bridge.begin_run();
        let current = bridge.begin_run();
        bridge.on_discovered(ids(&[0]), true, &config).unwrap();

        assert!(bridge.fail_open(old, &config).is_empty());
        assert!(active_session(&bridge).is_some());
        assert_eq!(bridge.fail_open(current, &config).len(), 2);
    }
}
