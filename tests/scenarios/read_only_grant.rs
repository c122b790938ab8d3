//! Scenario: Granting through a read-only group
//!
//! Journey: An admin wants to grant access to the members of an inherited,
//! read-only group. The group itself cannot be granted; its writable members
//! can.
//!
//! Steps:
//! 1. Admin selects the read-only "contractors" group
//! 2. Picker result replaces it with its writable members
//! 3. Members already in the table are not offered again
//!
//! Success Criteria:
//! - Root(read-only) -> [A(read-only), B, C] yields exactly [B, C]
//! - Only members of the folder's own kind are hoisted

use principal_tree::{promote_read_only, Modifiers, PermissionTable, PrincipalKind, PrincipalNode, PrincipalTree, SelectionTransfer};

use crate::common::*;

/// SCENARIO: promotion of a read-only root with mixed children
#[test]
fn scenario_read_only_root_yields_writable_children() {
    let root = group("R", vec![group("A", vec![]).read_only(), group("B", vec![]), group("C", vec![])])
        .read_only();

    let picked = promote_read_only(&[root], &[]);

    assert_eq!(names(&picked), vec!["B", "C"]);
}

/// SCENARIO: users inside a read-only group are a different kind and stay put
#[test]
fn scenario_picker_on_read_only_group() {
    let mut tree = PrincipalTree::new();
    tree.initialize(sample_forest());
    tree.expand(&key("contractors", PrincipalKind::Group));
    tree.select(&key("contractors", PrincipalKind::Group), Modifiers::NONE);

    // contractors holds users, the hoist keeps the group's own kind only.
    assert!(tree.picker_selection(&[]).is_empty());

    // Selecting the Users folder hoists its writable users.
    tree.select(&key("Users", PrincipalKind::User), Modifiers::NONE);
    let picked = tree.picker_selection(&[]);
    assert_eq!(names(&picked), vec!["alice"]);
}

/// SCENARIO: picker result feeds the table and skips what it already holds
#[test]
fn scenario_picker_skips_existing_table_entries() {
    let mut table = PermissionTable::new(vec![PrincipalKind::User]);
    table.receive_selection(&[user("alice")]);

    let users = PrincipalNode::folder(PrincipalKind::User)
        .with_children(vec![user("alice"), user("mallory"), user("bob").read_only()]);
    let mut tree = PrincipalTree::new();
    tree.initialize(vec![users]);
    tree.select(&key("Users", PrincipalKind::User), Modifiers::NONE);

    let picked = tree.picker_selection(&table.identities());
    assert_eq!(names(&picked), vec!["mallory"]);

    let report = table.receive_selection(&picked);
    assert_eq!(report.added, 1);
    assert_eq!(table.entries().len(), 2);
}
