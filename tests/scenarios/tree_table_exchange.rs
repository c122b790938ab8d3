//! Scenario: Granting access from the directory tree
//!
//! Journey: An admin picks principals in the tree and drops them on a
//! permission table, then sends some back.
//!
//! Steps:
//! 1. Tree loads the forest; folders open on first load
//! 2. Admin ctrl-selects alice, bob (read-only) and eng
//! 3. Selection is transferred into a table filtered on "read"
//! 4. The same selection is transferred again under a "write" filter
//! 5. Table selection is sent back into a tree that only holds users
//!
//! Success Criteria:
//! - Read-only nodes never leave the tree
//! - Repeated transfers widen hidden entries instead of duplicating them
//! - Incompatible kinds are filtered out silently

use principal_tree::{transfer, Modifiers, PermissionTable, PrincipalKind, PrincipalTree, SelectionTransfer, TreeOptions};

use crate::common::*;

/// SCENARIO: tree selection lands in the table once per identity
#[test]
fn scenario_tree_to_table_and_back() {
    let mut tree = PrincipalTree::new();
    tree.initialize(sample_forest());

    tree.select(&key("alice", PrincipalKind::User), Modifiers::NONE);
    tree.select(&key("bob", PrincipalKind::User), Modifiers::CTRL);
    tree.select(&key("eng", PrincipalKind::Group), Modifiers::CTRL);

    let mut table =
        PermissionTable::new(vec![PrincipalKind::User, PrincipalKind::Group]).with_action_filter(["read"]);
    let report = transfer(&mut tree, &mut table);

    assert_eq!(report.added, 2, "bob is read-only and stays behind");
    let rows: Vec<_> = table.rows().iter().map(|r| r.label.clone()).collect();
    assert_eq!(rows, vec!["alice", "eng"]);
    assert!(table.entries().iter().all(|e| e.node.children.is_none()));

    // Tree keeps its selection after sending.
    assert_eq!(tree.selection().len(), 3);

    // Same identities under a different filter are hidden, so they widen.
    table.set_action_filter(["write"]);
    let report = transfer(&mut tree, &mut table);
    assert_eq!(report.widened, 2);
    assert_eq!(table.entries().len(), 2);
    assert_eq!(table.visible_entries().len(), 2);

    // Back into a users-only tree: eng is filtered out, alice is new there.
    let mut users_only = PrincipalTree::new().with_options(TreeOptions {
        accepted_kinds: vec![PrincipalKind::User],
        ..TreeOptions::default()
    });
    users_only.initialize(vec![principal_tree::PrincipalNode::folder(PrincipalKind::User)
        .with_children(vec![user("zoe")])]);

    table.select(&key("alice", PrincipalKind::User), Modifiers::NONE);
    table.select(&key("eng", PrincipalKind::Group), Modifiers::SHIFT);
    let report = transfer(&mut table, &mut users_only);

    assert_eq!(report.added, 1);
    assert_eq!(report.rejected, 1);
    assert!(table.selection().is_empty());
    assert_eq!(names(users_only.forest()[0].children()), vec!["zoe", "alice"]);
}

/// SCENARIO: dropping an empty selection changes nothing
#[test]
fn scenario_empty_transfer_is_a_no_op() {
    let mut tree = PrincipalTree::new();
    tree.initialize(sample_forest());
    let mut table = PermissionTable::new(vec![PrincipalKind::User]);

    let report = transfer(&mut tree, &mut table);

    assert!(report.is_empty());
    assert!(table.entries().is_empty());
    assert!(tree.send_selection().is_empty());
}
