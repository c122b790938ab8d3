//! Tracing event sink

use tracing::{debug, info, warn};

use crate::domain::ports::{TreeEvent, TreeEventSink};

/// Logs every tree event. Selection chatter goes to debug, load problems and
/// integrity violations to warn.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl TreeEventSink for TracingEventSink {
    fn on_event(&self, event: TreeEvent) {
        match event {
            TreeEvent::ViewRecomputed {
                origin,
                generation,
                roots,
                nodes,
            } => debug!(?origin, generation, roots, nodes, "view recomputed"),
            TreeEvent::ExpandRestored { restored, dropped } => {
                debug!(restored, dropped, "expand state restored")
            }
            TreeEvent::NodeSelected { key } => debug!(%key, "node selected"),
            TreeEvent::SelectionChanged { keys } => debug!(count = keys.len(), "selection changed"),
            TreeEvent::SelectionReceived { accepted, rejected } => {
                info!(accepted, rejected, "selection received")
            }
            TreeEvent::LoadDiscarded { ticket, current } => {
                debug!(ticket, current, "stale load discarded")
            }
            TreeEvent::LoadFailed { scope, message } => warn!(%scope, %message, "load failed"),
            TreeEvent::IntegrityViolation {
                id,
                first,
                conflicting,
            } => warn!(%id, %first, %conflicting, "identity seen with two kinds"),
        }
    }
}
