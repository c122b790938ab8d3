//! Read-only promotion
//!
//! When a read-only subtree (or a synthetic folder) is picked for a grant,
//! its writable descendants of the same kind are hoisted to the top level of
//! the result so an inherited ancestor lock does not block granting access to
//! them.

use std::collections::HashSet;

use crate::domain::entities::PrincipalNode;
use crate::domain::value_objects::{PrincipalId, PrincipalKind};

/// Build the picker result for `selection`.
///
/// Writable concrete nodes pass through unchanged. Read-only nodes and folders
/// are replaced by their nearest writable descendants of the same kind;
/// descendants of another kind are skipped. Identities already present in
/// `existing` (the destination's top level) or earlier in the result are not
/// repeated.
pub fn promote_read_only(selection: &[PrincipalNode], existing: &[PrincipalId]) -> Vec<PrincipalNode> {
    let mut seen: HashSet<PrincipalId> = existing.iter().cloned().collect();
    let mut out = Vec::new();

    for node in selection {
        if is_locked(node) {
            hoist(node, node.kind, &mut seen, &mut out);
        } else {
            push_unique(node, &mut seen, &mut out);
        }
    }

    out
}

fn is_locked(node: &PrincipalNode) -> bool {
    node.read_only || node.is_root
}

fn hoist(
    locked: &PrincipalNode,
    kind: PrincipalKind,
    seen: &mut HashSet<PrincipalId>,
    out: &mut Vec<PrincipalNode>,
) {
    for child in locked.children() {
        if is_locked(child) {
            hoist(child, kind, seen, out);
        } else if child.kind == kind {
            push_unique(child, seen, out);
        }
    }
}

fn push_unique(node: &PrincipalNode, seen: &mut HashSet<PrincipalId>, out: &mut Vec<PrincipalNode>) {
    if seen.insert(node.id.clone()) {
        out.push(node.clone());
    }
}
