//! Permission table
//!
//! Flat list of principals holding a set of actions on some resource. The
//! table is the other end of the transfer protocol: it receives principals
//! picked in a tree and sends its own selection back.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::application::selection::{SelectionController, SelectionEvent};
use crate::application::transfer::{accepts, SelectionTransfer, TransferReport};
use crate::domain::entities::{FlatNode, PrincipalNode};
use crate::domain::ports::{NoopEventSink, TreeEvent, TreeEventSink};
use crate::domain::value_objects::{Modifiers, PrincipalId, PrincipalKey, PrincipalKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionEntry {
    /// Stored without children
    pub node: PrincipalNode,
    pub actions: BTreeSet<String>,
}

impl PermissionEntry {
    pub fn new(node: PrincipalNode, actions: BTreeSet<String>) -> Self {
        Self {
            node: PrincipalNode {
                children: None,
                expanded: false,
                ..node
            },
            actions,
        }
    }

    pub fn key(&self) -> PrincipalKey {
        self.node.key()
    }

    pub fn grants_all(&self, actions: &BTreeSet<String>) -> bool {
        actions.is_subset(&self.actions)
    }
}

pub struct PermissionTable {
    entries: Vec<PermissionEntry>,
    accepted_kinds: Vec<PrincipalKind>,
    action_filter: BTreeSet<String>,
    selection: SelectionController,
    sink: Arc<dyn TreeEventSink>,
}

impl PermissionTable {
    pub fn new(accepted_kinds: Vec<PrincipalKind>) -> Self {
        Self {
            entries: Vec::new(),
            accepted_kinds,
            action_filter: BTreeSet::new(),
            selection: SelectionController::new(),
            sink: Arc::new(NoopEventSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn TreeEventSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_action_filter<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action_filter = actions.into_iter().map(Into::into).collect();
        self
    }

    /// Show only entries holding every action in `actions`. Selections on
    /// rows that become hidden are dropped.
    pub fn set_action_filter<I, S>(&mut self, actions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action_filter = actions.into_iter().map(Into::into).collect();
        self.prune_selection();
    }

    pub fn action_filter(&self) -> &BTreeSet<String> {
        &self.action_filter
    }

    pub fn accepted_kinds(&self) -> &[PrincipalKind] {
        &self.accepted_kinds
    }

    pub fn entries(&self) -> &[PermissionEntry] {
        &self.entries
    }

    pub fn entry(&self, key: &PrincipalKey) -> Option<&PermissionEntry> {
        self.entries.iter().find(|e| e.node.has_key(key))
    }

    /// Identities in the table, for deduplicating picker results
    pub fn identities(&self) -> Vec<PrincipalId> {
        self.entries.iter().map(|e| e.node.id.clone()).collect()
    }

    pub fn is_visible(&self, entry: &PermissionEntry) -> bool {
        entry.grants_all(&self.action_filter)
    }

    pub fn visible_entries(&self) -> Vec<&PermissionEntry> {
        self.entries.iter().filter(|e| self.is_visible(e)).collect()
    }

    /// Visible entries as selectable rows. The path holds the entry index.
    pub fn rows(&self) -> Vec<FlatNode> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| self.is_visible(e))
            .map(|(i, e)| FlatNode::from_node(&e.node, 0, vec![i]))
            .collect()
    }

    pub fn select(&mut self, key: &PrincipalKey, modifiers: Modifiers) -> Vec<SelectionEvent> {
        let rows = self.rows();
        let Some(row) = rows.iter().find(|r| r.key == *key) else {
            return Vec::new();
        };
        let visible: Vec<&FlatNode> = rows.iter().collect();
        let events = self.selection.select_node(row, modifiers, &visible);
        for event in &events {
            self.emit(event);
        }
        events
    }

    pub fn selection(&self) -> &[FlatNode] {
        self.selection.selection()
    }

    /// Delete entries by key. Returns how many were removed.
    pub fn remove(&mut self, keys: &[PrincipalKey]) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !keys.contains(&e.key()));
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(removed, "removed permission entries");
            self.prune_selection();
        }
        removed
    }

    /// Grant `actions` to every selected entry
    pub fn grant<I, S>(&mut self, actions: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let actions: Vec<String> = actions.into_iter().map(Into::into).collect();
        let keys = self.selection.keys();
        let mut touched = 0;
        for entry in self.entries.iter_mut().filter(|e| keys.contains(&e.key())) {
            entry.actions.extend(actions.iter().cloned());
            touched += 1;
        }
        touched
    }

    fn prune_selection(&mut self) {
        let rows = self.rows();
        let changed = self
            .selection
            .retain_resolved(|key| rows.iter().find(|r| r.key == *key).cloned());
        if changed {
            let event = self.selection.changed();
            self.emit(&event);
        }
    }

    fn emit(&self, event: &SelectionEvent) {
        let event = match event {
            SelectionEvent::NodeSelected(key) => TreeEvent::NodeSelected { key: key.clone() },
            SelectionEvent::SelectionChanged(keys) => TreeEvent::SelectionChanged { keys: keys.clone() },
        };
        self.sink.on_event(event);
    }
}

impl SelectionTransfer for PermissionTable {
    /// Selected rows; the table clears its selection once they are sent
    fn send_selection(&mut self) -> Vec<PrincipalNode> {
        let sent: Vec<PrincipalNode> = self
            .selection
            .take()
            .into_iter()
            .filter(FlatNode::is_transferable)
            .filter_map(|row| row.path.first().and_then(|&i| self.entries.get(i)))
            .map(|entry| entry.node.clone())
            .collect();
        self.sink.on_event(TreeEvent::SelectionChanged { keys: Vec::new() });
        sent
    }

    /// New principals become entries holding the current action filter. An
    /// existing entry hidden by the filter is widened to hold it instead.
    fn receive_selection(&mut self, nodes: &[PrincipalNode]) -> TransferReport {
        let mut report = TransferReport::default();
        if nodes.is_empty() {
            return report;
        }

        for node in nodes {
            if !accepts(&self.accepted_kinds, node) {
                report.rejected += 1;
                continue;
            }
            let filter = &self.action_filter;
            match self.entries.iter_mut().find(|e| e.node == *node) {
                Some(entry) if entry.grants_all(filter) => report.duplicates += 1,
                Some(entry) => {
                    entry.actions.extend(filter.iter().cloned());
                    report.widened += 1;
                }
                None => {
                    self.entries
                        .push(PermissionEntry::new(node.clone(), filter.clone()));
                    report.added += 1;
                }
            }
        }

        debug!(
            added = report.added,
            widened = report.widened,
            duplicates = report.duplicates,
            rejected = report.rejected,
            "permission table received principals"
        );
        self.sink.on_event(TreeEvent::SelectionReceived {
            accepted: report.accepted(),
            rejected: report.rejected,
        });
        report
    }
}
