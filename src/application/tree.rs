//! Principal tree controller
//!
//! One tree widget's worth of state: the data store, the flattened view with
//! its expand state, the selection, and the load generation. Forest
//! replacements are made to look like incremental updates: expand state is
//! carried across by structural key and selections that no longer resolve
//! are pruned.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::load::{LoadGeneration, LoadOutcome, LoadTicket};
use crate::application::selection::{SelectionController, SelectionEvent};
use crate::application::store::{IntegrityIssue, TreeDataStore};
use crate::application::transfer::{accepts, SelectionTransfer, TransferReport};
use crate::domain::entities::{FlatNode, PrincipalNode};
use crate::domain::ports::{
    ForestLoader, LoadError, LoadScope, NoopEventSink, TreeEvent, TreeEventSink,
};
use crate::domain::services::{
    node_at_path, promote_read_only, ExpandSnapshot, Flattener, RelevanceRank, SearchRank,
};
use crate::domain::value_objects::{Modifiers, PrincipalId, PrincipalKey, PrincipalKind};
use crate::error::{TreeError, TreeResult};

/// Per-tree settings.
///
/// Keys are assumed unique within a forest. When a principal appears twice,
/// expand operations and position lookups act on its first occurrence only.
#[derive(Debug, Clone)]
pub struct TreeOptions {
    /// Open synthetic roots on the first load of this tree
    pub expand_roots: bool,
    /// Kinds this tree takes in through `receive_selection`
    pub accepted_kinds: Vec<PrincipalKind>,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            expand_roots: true,
            accepted_kinds: PrincipalKind::ALL.to_vec(),
        }
    }
}

pub struct PrincipalTree {
    store: TreeDataStore,
    flattener: Flattener,
    selection: SelectionController,
    loads: LoadGeneration,
    options: TreeOptions,
    sink: Arc<dyn TreeEventSink>,
    loaded: bool,
    /// Expand state of the unfiltered view, held while a filter is active
    unfiltered_layout: Option<ExpandSnapshot>,
}

impl Default for PrincipalTree {
    fn default() -> Self {
        Self::new()
    }
}

impl PrincipalTree {
    pub fn new() -> Self {
        Self::with_rank(Arc::new(RelevanceRank))
    }

    pub fn with_rank(rank: Arc<dyn SearchRank>) -> Self {
        Self {
            store: TreeDataStore::new(rank),
            flattener: Flattener::new(),
            selection: SelectionController::new(),
            loads: LoadGeneration::default(),
            options: TreeOptions::default(),
            sink: Arc::new(NoopEventSink),
            loaded: false,
            unfiltered_layout: None,
        }
    }

    pub fn with_options(mut self, options: TreeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn TreeEventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replace the forest. Expand state from the previous flat list is
    /// replayed once against the new one.
    pub fn initialize(&mut self, forest: Vec<PrincipalNode>) {
        let snapshot = self.flattener.snapshot();
        self.store.initialize(forest);
        for issue in self.store.integrity_issues() {
            self.sink.on_event(TreeEvent::IntegrityViolation {
                id: issue.id.clone(),
                first: issue.first,
                conflicting: issue.conflicting,
            });
        }
        self.rebuild();

        if !self.loaded && snapshot.is_empty() {
            if self.options.expand_roots {
                let opened = self
                    .flattener
                    .expand_where(self.store.view_roots_mut(), |n| n.is_root);
                debug!(opened, "expanded synthetic roots on first load");
            }
        } else {
            let report = self.flattener.restore(&snapshot, self.store.view_roots_mut());
            debug!(
                restored = report.restored,
                dropped = report.dropped,
                "restored expand state"
            );
            self.sink.on_event(TreeEvent::ExpandRestored {
                restored: report.restored,
                dropped: report.dropped,
            });
        }

        self.loaded = true;
        self.prune_selection();
    }

    /// Change the filter term. Matching ancestors open themselves. The
    /// unfiltered layout is set aside on the way in and put back once the
    /// term is cleared; expand changes made while filtered are not kept.
    pub fn filter(&mut self, term: impl Into<String>) {
        if self.store.term().is_empty() && self.loaded {
            self.unfiltered_layout = Some(self.flattener.snapshot());
        }
        self.store.filter(term);
        self.rebuild();
        if self.store.term().is_empty() {
            self.restore_unfiltered_layout();
        }
        self.prune_selection();
    }

    /// Re-flatten the current view, e.g. to force a relayout
    pub fn refresh(&mut self) {
        self.store.refresh();
        self.rebuild();
        self.prune_selection();
    }

    pub fn term(&self) -> &str {
        self.store.term()
    }

    /// Authoritative, unfiltered forest
    pub fn forest(&self) -> &[PrincipalNode] {
        self.store.forest()
    }

    /// Filtered forest currently on display
    pub fn view(&self) -> &[PrincipalNode] {
        &self.store.view().roots
    }

    pub fn flat_nodes(&self) -> &[FlatNode] {
        self.flattener.nodes()
    }

    pub fn visible(&self) -> Vec<&FlatNode> {
        self.flattener.visible()
    }

    pub fn visible_len(&self) -> usize {
        self.flattener.visible_len()
    }

    pub fn flat(&self, key: &PrincipalKey) -> Option<&FlatNode> {
        self.flattener.get(key)
    }

    /// The node in the current view with this key (first-seen on duplicates)
    pub fn node(&self, key: &PrincipalKey) -> Option<&PrincipalNode> {
        self.flattener.get(key).and_then(|flat| self.resolve(flat))
    }

    pub fn integrity_issues(&self) -> &[IntegrityIssue] {
        self.store.integrity_issues()
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn expand(&mut self, key: &PrincipalKey) -> bool {
        self.flattener.set_expanded(key, true, self.store.view_roots_mut())
    }

    pub fn collapse(&mut self, key: &PrincipalKey) -> bool {
        self.flattener.set_expanded(key, false, self.store.view_roots_mut())
    }

    pub fn toggle(&mut self, key: &PrincipalKey) -> bool {
        self.flattener.toggle(key, self.store.view_roots_mut())
    }

    pub fn expand_all(&mut self) -> usize {
        self.flattener.expand_all(self.store.view_roots_mut())
    }

    pub fn collapse_all(&mut self) -> usize {
        self.flattener.collapse_all(self.store.view_roots_mut())
    }

    /// Click on a visible node. Clicks on hidden or unknown nodes are ignored.
    pub fn select(&mut self, key: &PrincipalKey, modifiers: Modifiers) -> Vec<SelectionEvent> {
        let visible = self.flattener.visible();
        let Some(node) = visible.iter().copied().find(|n| n.key == *key) else {
            return Vec::new();
        };
        let events = self.selection.select_node(node, modifiers, &visible);
        self.emit_selection(&events);
        events
    }

    /// Click on the row at `position` in the visible sequence
    pub fn select_at(&mut self, position: usize, modifiers: Modifiers) -> Vec<SelectionEvent> {
        match self.flattener.visible_at(position).map(|n| n.key.clone()) {
            Some(key) => self.select(&key, modifiers),
            None => Vec::new(),
        }
    }

    pub fn select_all(&mut self) -> SelectionEvent {
        let visible = self.flattener.visible();
        let event = self.selection.select_all(&visible);
        self.emit_selection(std::slice::from_ref(&event));
        event
    }

    pub fn clear_selection(&mut self) {
        if let Some(event) = self.selection.clear() {
            self.emit_selection(&[event]);
        }
    }

    pub fn selection(&self) -> &[FlatNode] {
        self.selection.selection()
    }

    /// Selected nodes with their (filtered) subtrees, in selection order
    pub fn selected_nodes(&self) -> Vec<PrincipalNode> {
        self.selection
            .selection()
            .iter()
            .filter_map(|flat| self.resolve(flat))
            .cloned()
            .collect()
    }

    /// Nodes carried by a drag that starts on `key`
    pub fn drag_start(&self, key: &PrincipalKey) -> Vec<PrincipalNode> {
        let Some(dragged) = self.flattener.get(key) else {
            return Vec::new();
        };
        self.selection
            .drag_payload(dragged)
            .iter()
            .filter_map(|flat| self.resolve(flat))
            .cloned()
            .collect()
    }

    /// Selection prepared for the picker dialog: read-only subtrees give way
    /// to their writable descendants, minus identities in `existing`.
    pub fn picker_selection(&self, existing: &[PrincipalId]) -> Vec<PrincipalNode> {
        promote_read_only(&self.selected_nodes(), existing)
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.loads.begin()
    }

    /// Apply a load result if `ticket` is still the latest load.
    ///
    /// A failed load leaves the current view, expand state and selection
    /// untouched and is returned to the caller.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        scope: &LoadScope,
        result: Result<Vec<PrincipalNode>, LoadError>,
    ) -> TreeResult<LoadOutcome> {
        if !self.loads.is_current(ticket) {
            debug!(
                ticket = ticket.generation(),
                current = self.loads.current(),
                "discarding stale forest load"
            );
            self.sink.on_event(TreeEvent::LoadDiscarded {
                ticket: ticket.generation(),
                current: self.loads.current(),
            });
            return Ok(LoadOutcome::Discarded);
        }

        match result {
            Ok(forest) => {
                self.initialize(forest);
                Ok(LoadOutcome::Applied {
                    roots: self.store.forest().len(),
                    nodes: self.store.forest().iter().map(PrincipalNode::node_count).sum(),
                })
            }
            Err(source) => {
                warn!(%scope, error = %source, "forest load failed; keeping previous view");
                self.sink.on_event(TreeEvent::LoadFailed {
                    scope: scope.to_string(),
                    message: source.to_string(),
                });
                Err(TreeError::LoadFailed {
                    scope: scope.to_string(),
                    source,
                })
            }
        }
    }

    /// Load and apply a forest in one step
    pub fn reload(&mut self, loader: &dyn ForestLoader, scope: &LoadScope) -> TreeResult<LoadOutcome> {
        let ticket = self.begin_load();
        let result = loader.load_forest(scope);
        self.complete_load(ticket, scope, result)
    }

    fn restore_unfiltered_layout(&mut self) {
        match self.unfiltered_layout.take() {
            Some(snapshot) => {
                self.flattener.collapse_all(self.store.view_roots_mut());
                let report = self.flattener.restore(&snapshot, self.store.view_roots_mut());
                debug!(
                    restored = report.restored,
                    dropped = report.dropped,
                    "put back unfiltered layout"
                );
            }
            // Filtered since before the first load: fall back to the first-load layout.
            None if self.loaded && self.options.expand_roots => {
                self.flattener
                    .expand_where(self.store.view_roots_mut(), |n| n.is_root);
            }
            None => {}
        }
    }

    fn resolve(&self, flat: &FlatNode) -> Option<&PrincipalNode> {
        node_at_path(&self.store.view().roots, &flat.path)
    }

    fn rebuild(&mut self) {
        let view = self.store.view();
        self.flattener.rebuild(&view.roots);
        self.sink.on_event(TreeEvent::ViewRecomputed {
            origin: view.origin,
            generation: view.generation,
            roots: view.roots.len(),
            nodes: self.flattener.len(),
        });
    }

    fn prune_selection(&mut self) {
        let flattener = &self.flattener;
        if self.selection.retain_resolved(|key| flattener.get(key).cloned()) {
            debug!(
                remaining = self.selection.len(),
                "dropped selections no longer in the tree"
            );
            self.sink.on_event(TreeEvent::SelectionChanged {
                keys: self.selection.keys(),
            });
        }
    }

    fn emit_selection(&self, events: &[SelectionEvent]) {
        for event in events {
            let event = match event {
                SelectionEvent::NodeSelected(key) => TreeEvent::NodeSelected { key: key.clone() },
                SelectionEvent::SelectionChanged(keys) => TreeEvent::SelectionChanged {
                    keys: keys.clone(),
                },
            };
            self.sink.on_event(event);
        }
    }
}

impl SelectionTransfer for PrincipalTree {
    /// Transferable members of the selection; the tree keeps its selection
    fn send_selection(&mut self) -> Vec<PrincipalNode> {
        self.selection
            .selection()
            .iter()
            .filter(|flat| flat.is_transferable())
            .filter_map(|flat| self.resolve(flat))
            .cloned()
            .collect()
    }

    /// Insert unknown principals under the folder of their kind (or at the top
    /// level when there is none) and recompute, keeping expand state.
    fn receive_selection(&mut self, nodes: &[PrincipalNode]) -> TransferReport {
        let mut report = TransferReport::default();
        if nodes.is_empty() {
            return report;
        }

        let mut forest = self.store.forest().to_vec();
        for node in nodes {
            if !accepts(&self.options.accepted_kinds, node) {
                report.rejected += 1;
                continue;
            }
            if contains_identity(&forest, &node.id) {
                report.duplicates += 1;
                continue;
            }
            let mut incoming = node.clone();
            incoming.expanded = false;
            match forest
                .iter_mut()
                .find(|root| root.is_root && root.kind == node.kind)
            {
                Some(folder) => folder.add_child(incoming),
                None => forest.push(incoming),
            }
            report.added += 1;
        }

        if report.rejected > 0 {
            debug!(
                rejected = report.rejected,
                "dropped principals of kinds this tree does not hold"
            );
        }
        if report.added > 0 {
            self.initialize(forest);
        }
        self.sink.on_event(TreeEvent::SelectionReceived {
            accepted: report.accepted(),
            rejected: report.rejected,
        });
        report
    }
}

fn contains_identity(forest: &[PrincipalNode], id: &PrincipalId) -> bool {
    forest
        .iter()
        .any(|n| (!n.is_root && n.id == *id) || contains_identity(n.children(), id))
}
