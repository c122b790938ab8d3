//! Forest flattening and expand-state bookkeeping
//!
//! `flatten` turns a forest into a pre-order list of `FlatNode`s. `Flattener`
//! keeps that list for one tree instance, tracks which rows are visible under
//! the current expand state, and carries expand state across wholesale forest
//! replacements by structural key rather than by object identity.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::entities::{FlatNode, PrincipalNode};
use crate::domain::value_objects::PrincipalKey;

/// Pre-order depth-first flattening of every node in the forest
pub fn flatten(forest: &[PrincipalNode]) -> Vec<FlatNode> {
    let mut out = Vec::new();
    for (i, root) in forest.iter().enumerate() {
        flatten_node(root, 0, vec![i], &mut out);
    }
    out
}

fn flatten_node(node: &PrincipalNode, level: usize, path: Vec<usize>, out: &mut Vec<FlatNode>) {
    out.push(FlatNode::from_node(node, level, path.clone()));

    if node.is_expandable() {
        for (i, child) in node.children().iter().enumerate() {
            let mut child_path = path.clone();
            child_path.push(i);
            flatten_node(child, level + 1, child_path, out);
        }
    }
}

/// Resolve a flat node path back to the node it projects
pub fn node_at_path<'a>(forest: &'a [PrincipalNode], path: &[usize]) -> Option<&'a PrincipalNode> {
    let (first, rest) = path.split_first()?;
    let mut node = forest.get(*first)?;
    for idx in rest {
        node = node.children().get(*idx)?;
    }
    Some(node)
}

fn node_at_path_mut<'a>(
    forest: &'a mut [PrincipalNode],
    path: &[usize],
) -> Option<&'a mut PrincipalNode> {
    let (first, rest) = path.split_first()?;
    let mut node = forest.get_mut(*first)?;
    for idx in rest {
        node = node.children.as_mut()?.get_mut(*idx)?;
    }
    Some(node)
}

/// Expanded nodes captured before a forest is discarded, ancestors first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandSnapshot {
    entries: Vec<(usize, PrincipalKey)>,
}

impl ExpandSnapshot {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &PrincipalKey> {
        self.entries.iter().map(|(_, key)| key)
    }
}

/// Outcome of replaying a snapshot against a new forest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreReport {
    pub restored: usize,
    /// Snapshot entries with no structural match in the new forest
    pub dropped: usize,
}

#[derive(Debug, Default)]
pub struct Flattener {
    nodes: Vec<FlatNode>,
    /// First-seen position of every key
    index: HashMap<PrincipalKey, usize>,
    /// Positions in `nodes` whose ancestors are all expanded
    visible: Vec<usize>,
}

impl Flattener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the flat list with a fresh flattening of `forest`
    pub fn rebuild(&mut self, forest: &[PrincipalNode]) {
        self.nodes = flatten(forest);
        self.index.clear();
        let mut repeated = 0;
        for (i, node) in self.nodes.iter().enumerate() {
            if self.index.contains_key(&node.key) {
                repeated += 1;
            } else {
                self.index.insert(node.key.clone(), i);
            }
        }
        if repeated > 0 {
            // Expand and position lookups reach only the first occurrence.
            debug!(repeated, "forest repeats keys; later occurrences are not indexed");
        }
        self.recompute_visible();
    }

    /// Every node, in pre-order
    pub fn nodes(&self) -> &[FlatNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, key: &PrincipalKey) -> Option<&FlatNode> {
        self.index.get(key).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, key: &PrincipalKey) -> bool {
        self.index.contains_key(key)
    }

    /// Nodes currently visible, in display order
    pub fn visible(&self) -> Vec<&FlatNode> {
        self.visible.iter().map(|&i| &self.nodes[i]).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn visible_at(&self, position: usize) -> Option<&FlatNode> {
        self.visible.get(position).map(|&i| &self.nodes[i])
    }

    /// Position of `key` in the visible sequence
    pub fn visible_position(&self, key: &PrincipalKey) -> Option<usize> {
        let idx = *self.index.get(key)?;
        self.visible.binary_search(&idx).ok()
    }

    /// Capture the expanded nodes, sorted by ascending depth
    pub fn snapshot(&self) -> ExpandSnapshot {
        let mut entries: Vec<(usize, PrincipalKey)> = self
            .nodes
            .iter()
            .filter(|n| n.expanded)
            .map(|n| (n.level, n.key.clone()))
            .collect();
        entries.sort_by_key(|(level, _)| *level);
        ExpandSnapshot { entries }
    }

    /// Replay a snapshot against the current flat list and write the state
    /// back into `forest`. Entries without a structural match are dropped.
    pub fn restore(
        &mut self,
        snapshot: &ExpandSnapshot,
        forest: &mut [PrincipalNode],
    ) -> RestoreReport {
        let mut report = RestoreReport::default();
        for (_, key) in &snapshot.entries {
            match self.index.get(key).copied() {
                Some(i) if self.nodes[i].expandable => {
                    self.write_expanded(i, true, forest);
                    report.restored += 1;
                }
                _ => report.dropped += 1,
            }
        }
        self.recompute_visible();
        report
    }

    /// Set the expand state of one node. Returns true if it changed.
    pub fn set_expanded(
        &mut self,
        key: &PrincipalKey,
        expanded: bool,
        forest: &mut [PrincipalNode],
    ) -> bool {
        let Some(&i) = self.index.get(key) else {
            return false;
        };
        if !self.nodes[i].expandable || self.nodes[i].expanded == expanded {
            return false;
        }
        self.write_expanded(i, expanded, forest);
        self.recompute_visible();
        true
    }

    pub fn toggle(&mut self, key: &PrincipalKey, forest: &mut [PrincipalNode]) -> bool {
        let Some(expanded) = self.get(key).map(|n| !n.expanded) else {
            return false;
        };
        self.set_expanded(key, expanded, forest)
    }

    /// Expand every expandable node matching `predicate`
    pub fn expand_where(
        &mut self,
        forest: &mut [PrincipalNode],
        predicate: impl Fn(&FlatNode) -> bool,
    ) -> usize {
        let targets: Vec<usize> = (0..self.nodes.len())
            .filter(|&i| {
                let n = &self.nodes[i];
                n.expandable && !n.expanded && predicate(n)
            })
            .collect();
        for &i in &targets {
            self.write_expanded(i, true, forest);
        }
        self.recompute_visible();
        targets.len()
    }

    pub fn expand_all(&mut self, forest: &mut [PrincipalNode]) -> usize {
        self.expand_where(forest, |_| true)
    }

    pub fn collapse_all(&mut self, forest: &mut [PrincipalNode]) -> usize {
        let targets: Vec<usize> = (0..self.nodes.len())
            .filter(|&i| self.nodes[i].expanded)
            .collect();
        for &i in &targets {
            self.write_expanded(i, false, forest);
        }
        self.recompute_visible();
        targets.len()
    }

    fn write_expanded(&mut self, i: usize, expanded: bool, forest: &mut [PrincipalNode]) {
        self.nodes[i].expanded = expanded;
        if let Some(node) = node_at_path_mut(forest, &self.nodes[i].path) {
            node.expanded = expanded;
        }
    }

    fn recompute_visible(&mut self) {
        self.visible.clear();
        let mut collapsed_at: Option<usize> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(level) = collapsed_at {
                if node.level > level {
                    continue;
                }
                collapsed_at = None;
            }
            self.visible.push(i);
            if node.expandable && !node.expanded {
                collapsed_at = Some(node.level);
            }
        }
    }
}
