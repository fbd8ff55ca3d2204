//! Capabilities the reveal controller consumes from its host.
//!
//! Both traits are implemented by whatever renders the page: the desktop
//! webview bridge in the app, or recording fakes in tests. The controller
//! only calls them; it never inspects how they are fulfilled.

use super::types::{SessionId, TargetId, Threshold};

/// Query-by-tag and style mutation over the rendered tree.
pub trait RenderSurface {
    /// All elements currently carrying `tag`, in document order.
    fn find_tagged(&mut self, tag: &str) -> Vec<TargetId>;

    /// Apply or remove the "visible" marker on `target`.
    fn set_marker(&mut self, target: TargetId, visible: bool);
}

/// Platform facility reporting when targets overlap the viewport.
///
/// Reports come back asynchronously as [`EventBatch`](super::EventBatch)es
/// tagged with the session that requested them.
pub trait IntersectionPrimitive {
    fn observe(&mut self, session: SessionId, target: TargetId, threshold: Threshold);

    fn unobserve(&mut self, session: SessionId, target: TargetId);
}
