//! Tree Event Port
//!
//! Observable stream of everything a tree or table controller does:
//! recomputed views, selection changes, load outcomes and data-integrity
//! reports. Hosts subscribe by supplying a sink.

use crate::domain::value_objects::{PrincipalId, PrincipalKey, PrincipalKind};

/// Which input triggered a recomputation of the derived view
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewOrigin {
    /// The authoritative forest was replaced
    ForestReplaced,
    /// The filter term changed
    FilterChanged,
    /// The current view was re-emitted unchanged
    Refresh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeEvent {
    ViewRecomputed {
        origin: ViewOrigin,
        generation: u64,
        roots: usize,
        nodes: usize,
    },

    /// Expand state replayed after a forest replacement
    ExpandRestored { restored: usize, dropped: usize },

    /// Plain click on a single node
    NodeSelected { key: PrincipalKey },

    SelectionChanged { keys: Vec<PrincipalKey> },

    /// Nodes merged in through the transfer protocol
    SelectionReceived { accepted: usize, rejected: usize },

    /// A load result arrived after a newer load was started
    LoadDiscarded { ticket: u64, current: u64 },

    LoadFailed { scope: String, message: String },

    /// Same identity seen with two different kinds in one forest
    IntegrityViolation {
        id: PrincipalId,
        first: PrincipalKind,
        conflicting: PrincipalKind,
    },
}

pub trait TreeEventSink: Send + Sync {
    fn on_event(&self, event: TreeEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl TreeEventSink for NoopEventSink {
    fn on_event(&self, _event: TreeEvent) {}
}
