//! Selection controller
//!
//! Multi-selection over the currently visible sequence of one tree or table
//! instance: plain click, shift-range and ctrl/cmd-toggle. The last element of
//! the selection anchors later shift-clicks.

use crate::domain::entities::FlatNode;
use crate::domain::value_objects::{Modifiers, PrincipalKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A plain click selected exactly this node
    NodeSelected(PrincipalKey),
    SelectionChanged(Vec<PrincipalKey>),
}

#[derive(Debug, Default)]
pub struct SelectionController {
    selection: Vec<FlatNode>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a click on `node`. `visible` is the sequence the user sees.
    pub fn select_node(
        &mut self,
        node: &FlatNode,
        modifiers: Modifiers,
        visible: &[&FlatNode],
    ) -> Vec<SelectionEvent> {
        if modifiers.shift {
            self.select_range(node, visible);
            return vec![self.changed()];
        }

        if modifiers.ctrl {
            match self.position(&node.key) {
                Some(pos) => {
                    self.selection.remove(pos);
                }
                None => self.selection.push(node.clone()),
            }
            return vec![self.changed()];
        }

        self.selection = vec![node.clone()];
        vec![SelectionEvent::NodeSelected(node.key.clone()), self.changed()]
    }

    /// Contiguous visible range between the anchor and `node`, inclusive.
    ///
    /// The range keeps visible order, so when the click lands before the
    /// anchor the anchor stays last, and when it lands after, the clicked node
    /// becomes the new anchor. The anchor is not re-appended after a forward
    /// range; see `shift_range_forward_then_backward`.
    fn select_range(&mut self, node: &FlatNode, visible: &[&FlatNode]) {
        let anchor_pos = self
            .anchor()
            .and_then(|anchor| visible.iter().position(|n| n.key == anchor.key));
        let node_pos = visible.iter().position(|n| n.key == node.key);

        match (anchor_pos, node_pos) {
            (Some(a), Some(b)) => {
                let (lo, hi) = (a.min(b), a.max(b));
                self.selection = visible[lo..=hi].iter().map(|n| (*n).clone()).collect();
            }
            // Empty selection, or the anchor scrolled out of the visible sequence.
            _ => self.selection = vec![node.clone()],
        }
    }

    /// Replace the selection with every visible row
    pub fn select_all(&mut self, visible: &[&FlatNode]) -> SelectionEvent {
        self.selection = visible.iter().map(|n| (*n).clone()).collect();
        self.changed()
    }

    /// Clear the selection; returns the change event if anything was selected
    pub fn clear(&mut self) -> Option<SelectionEvent> {
        if self.selection.is_empty() {
            return None;
        }
        self.selection.clear();
        Some(self.changed())
    }

    /// Take the current selection, leaving it empty
    pub fn take(&mut self) -> Vec<FlatNode> {
        std::mem::take(&mut self.selection)
    }

    pub fn selection(&self) -> &[FlatNode] {
        &self.selection
    }

    pub fn keys(&self) -> Vec<PrincipalKey> {
        self.selection.iter().map(|n| n.key.clone()).collect()
    }

    pub fn anchor(&self) -> Option<&FlatNode> {
        self.selection.last()
    }

    pub fn is_selected(&self, key: &PrincipalKey) -> bool {
        self.position(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Re-resolve every member against a new flat list. Members that no
    /// longer resolve are dropped; survivors keep their order. Returns true if
    /// any member was dropped.
    pub fn retain_resolved(&mut self, resolve: impl Fn(&PrincipalKey) -> Option<FlatNode>) -> bool {
        let before = self.selection.len();
        self.selection = self
            .selection
            .iter()
            .filter_map(|n| resolve(&n.key))
            .collect();
        self.selection.len() != before
    }

    /// Drop the given keys from the selection. Returns true if any was removed.
    pub fn remove(&mut self, keys: &[PrincipalKey]) -> bool {
        let before = self.selection.len();
        self.selection.retain(|n| !keys.contains(&n.key));
        self.selection.len() != before
    }

    /// Nodes carried by a drag starting on `dragged`.
    ///
    /// The whole selection travels when more than one node is selected and
    /// the dragged node is one of them; otherwise only the dragged node does.
    /// Read-only nodes and synthetic folders never travel.
    pub fn drag_payload(&self, dragged: &FlatNode) -> Vec<FlatNode> {
        let payload = if self.selection.len() > 1 && self.is_selected(&dragged.key) {
            self.selection.clone()
        } else {
            vec![dragged.clone()]
        };
        payload.into_iter().filter(|n| n.is_transferable()).collect()
    }

    pub fn changed(&self) -> SelectionEvent {
        SelectionEvent::SelectionChanged(self.keys())
    }

    fn position(&self, key: &PrincipalKey) -> Option<usize> {
        self.selection.iter().position(|n| n.key == *key)
    }
}
