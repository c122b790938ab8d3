//! Scenario: Directory refresh after an edit
//!
//! Journey: The admin has opened some groups and selected a few people. A
//! principal is renamed elsewhere, so the loader returns a brand new forest.
//!
//! Steps:
//! 1. Tree loads, admin opens "eng" and selects carol and dave
//! 2. dave is deleted and a new member joins eng
//! 3. A stale load from before the edit resolves late
//!
//! Success Criteria:
//! - eng stays open; the new member is visible
//! - dave drops out of the selection, carol stays
//! - the stale load is discarded

use principal_tree::application::LoadOutcome;
use principal_tree::{LoadScope, Modifiers, PrincipalKind, PrincipalTree};

use crate::common::*;

/// SCENARIO: replacement looks like an incremental update
#[test]
fn scenario_reload_keeps_open_groups_and_live_selection() {
    let scope = LoadScope::new("directory");
    let mut tree = PrincipalTree::new();
    let first = tree.begin_load();
    tree.complete_load(first, &scope, Ok(sample_forest())).unwrap();

    tree.expand(&key("eng", PrincipalKind::Group));
    tree.select(&key("carol", PrincipalKind::User), Modifiers::NONE);
    tree.select(&key("dave", PrincipalKind::User), Modifiers::CTRL);

    let stale = tree.begin_load();
    let fresh = tree.begin_load();

    let mut edited = sample_forest();
    let eng = &mut edited[1].children.as_mut().unwrap()[0];
    eng.children = Some(vec![user("carol"), user("grace")]);
    let outcome = tree.complete_load(fresh, &scope, Ok(edited)).unwrap();
    assert!(matches!(outcome, LoadOutcome::Applied { .. }));

    let late = tree.complete_load(stale, &scope, Ok(sample_forest())).unwrap();
    assert_eq!(late, LoadOutcome::Discarded);

    let visible: Vec<_> = tree.visible().iter().map(|n| n.label.clone()).collect();
    assert_eq!(
        visible,
        vec!["Users", "alice", "bob", "Groups", "eng", "carol", "grace", "contractors"]
    );
    let selected: Vec<_> = tree.selection().iter().map(|n| n.label.clone()).collect();
    assert_eq!(selected, vec!["carol"]);
}

/// SCENARIO: search while the directory reloads keeps the term
#[test]
fn scenario_filter_survives_reload() {
    let mut tree = PrincipalTree::new();
    tree.initialize(sample_forest());
    tree.filter("er");

    let mut edited = sample_forest();
    edited[0].add_child(user("oliver"));
    tree.initialize(edited);

    assert_eq!(tree.term(), "er");
    let leaves: Vec<_> = tree
        .visible()
        .iter()
        .filter(|n| !n.expandable)
        .map(|n| n.label.clone())
        .collect();
    assert_eq!(leaves, vec!["oliver", "erin"]);
}
