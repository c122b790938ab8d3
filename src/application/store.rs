//! Tree data store
//!
//! Holds the authoritative (unfiltered) forest and the live filter term as two
//! independent inputs, and the derived view computed from both. Every change to
//! either input recomputes the view from the latest value of *both*, so a
//! filter change followed by a forest replacement never applies a stale term.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::PrincipalNode;
use crate::domain::ports::ViewOrigin;
use crate::domain::services::SearchRank;
use crate::domain::value_objects::{PrincipalId, PrincipalKind};

/// The filtered forest handed to the flattener
#[derive(Debug, Clone)]
pub struct DerivedView {
    pub origin: ViewOrigin,
    /// Bumped on every emission, including refreshes
    pub generation: u64,
    pub roots: Vec<PrincipalNode>,
}

/// Same identity seen with two kinds in one forest snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityIssue {
    pub id: PrincipalId,
    /// Kind of the first-seen node, which stays authoritative
    pub first: PrincipalKind,
    pub conflicting: PrincipalKind,
}

pub struct TreeDataStore {
    forest: Vec<PrincipalNode>,
    term: String,
    rank: Arc<dyn SearchRank>,
    view: DerivedView,
    /// Set by `filter`, cleared by `initialize`
    filter_applied: bool,
    issues: Vec<IntegrityIssue>,
}

impl TreeDataStore {
    pub fn new(rank: Arc<dyn SearchRank>) -> Self {
        Self {
            forest: Vec::new(),
            term: String::new(),
            rank,
            view: DerivedView {
                origin: ViewOrigin::ForestReplaced,
                generation: 0,
                roots: Vec::new(),
            },
            filter_applied: false,
            issues: Vec::new(),
        }
    }

    /// Replace the authoritative forest and recompute the derived view
    pub fn initialize(&mut self, forest: Vec<PrincipalNode>) -> &DerivedView {
        let (forest, unnamed) = strip_unnamed(forest);
        if unnamed > 0 {
            warn!(unnamed, "dropped principals with an empty name");
        }
        self.issues = find_integrity_issues(&forest);
        for issue in &self.issues {
            warn!(
                id = %issue.id,
                first = %issue.first,
                conflicting = %issue.conflicting,
                "principal identity appears with two kinds; keeping first-seen node"
            );
        }
        self.forest = forest;
        self.filter_applied = false;
        self.recombine(ViewOrigin::ForestReplaced)
    }

    /// Update the filter term and recompute the derived view
    pub fn filter(&mut self, term: impl Into<String>) -> &DerivedView {
        self.term = term.into();
        self.filter_applied = true;
        self.recombine(ViewOrigin::FilterChanged)
    }

    /// Re-emit the current derived view unchanged
    pub fn refresh(&mut self) -> &DerivedView {
        self.view.origin = ViewOrigin::Refresh;
        self.view.generation += 1;
        &self.view
    }

    pub fn forest(&self) -> &[PrincipalNode] {
        &self.forest
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn view(&self) -> &DerivedView {
        &self.view
    }

    /// Derived roots, for writing expand state back into the view
    pub(crate) fn view_roots_mut(&mut self) -> &mut [PrincipalNode] {
        &mut self.view.roots
    }

    /// Whether the last recomputation came from a filter change
    pub fn filter_applied(&self) -> bool {
        self.filter_applied
    }

    pub fn integrity_issues(&self) -> &[IntegrityIssue] {
        &self.issues
    }

    fn recombine(&mut self, origin: ViewOrigin) -> &DerivedView {
        let roots = derive(&self.forest, &self.term, self.rank.as_ref());
        self.view = DerivedView {
            origin,
            generation: self.view.generation + 1,
            roots,
        };
        debug!(
            ?origin,
            term = %self.term,
            generation = self.view.generation,
            roots = self.view.roots.len(),
            "recomputed derived view"
        );
        &self.view
    }
}

/// `forest.map(filter).drop(None)` sorted by relevance. An empty term passes
/// the forest through untouched.
pub fn derive(forest: &[PrincipalNode], term: &str, rank: &dyn SearchRank) -> Vec<PrincipalNode> {
    if term.is_empty() {
        return forest.to_vec();
    }
    let mut roots: Vec<PrincipalNode> = forest
        .iter()
        .filter_map(|root| root.filter(term, rank))
        .collect();
    roots.sort_by(|a, b| rank.rank(term, a, b));
    roots
}

/// Remove nodes whose identity is empty, together with their subtrees.
/// Returns the surviving forest and the number of nodes removed.
pub fn strip_unnamed(forest: Vec<PrincipalNode>) -> (Vec<PrincipalNode>, usize) {
    let mut removed = 0;
    let kept = forest
        .into_iter()
        .filter_map(|mut node| {
            if node.id.is_empty() {
                removed += node.node_count();
                return None;
            }
            if let Some(children) = node.children.take() {
                let (children, count) = strip_unnamed(children);
                removed += count;
                node.children = Some(children);
            }
            Some(node)
        })
        .collect();
    (kept, removed)
}

/// Pre-order scan for identities that appear with more than one kind
pub fn find_integrity_issues(forest: &[PrincipalNode]) -> Vec<IntegrityIssue> {
    fn visit(
        node: &PrincipalNode,
        seen: &mut HashMap<PrincipalId, PrincipalKind>,
        issues: &mut Vec<IntegrityIssue>,
    ) {
        // Synthetic folders share names like "Users" across providers; skip them.
        if !node.is_root {
            match seen.get(&node.id) {
                Some(first) if *first != node.kind => issues.push(IntegrityIssue {
                    id: node.id.clone(),
                    first: *first,
                    conflicting: node.kind,
                }),
                Some(_) => {}
                None => {
                    seen.insert(node.id.clone(), node.kind);
                }
            }
        }
        for child in node.children() {
            visit(child, seen, issues);
        }
    }

    let mut seen = HashMap::new();
    let mut issues = Vec::new();
    for root in forest {
        visit(root, &mut seen, &mut issues);
    }
    issues
}
