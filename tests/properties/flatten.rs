//! Property tests for flattening and visibility.

use proptest::prelude::*;

use principal_tree::domain::services::flatten;
use principal_tree::{PrincipalTree, TreeOptions};

use crate::strategies::{forest, pre_order};

fn collapsed_tree() -> PrincipalTree {
    PrincipalTree::new().with_options(TreeOptions {
        expand_roots: false,
        ..TreeOptions::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the flat list is a pre-order walk with depth as level.
    #[test]
    fn property_flatten_is_pre_order(forest in forest()) {
        let flat = flatten(&forest);
        let rows: Vec<(usize, String)> = flat.iter().map(|n| (n.level, n.key.id.name.clone())).collect();
        prop_assert_eq!(rows, pre_order(&forest));
    }

    /// PROPERTY: a node is visible iff every ancestor is expanded.
    #[test]
    fn property_visibility_follows_ancestors(
        forest in forest(),
        toggles in proptest::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let mut tree = collapsed_tree();
        tree.initialize(forest);
        let keys: Vec<_> = tree.flat_nodes().iter().map(|n| n.key.clone()).collect();
        for index in toggles {
            tree.toggle(&keys[index.index(keys.len())]);
        }

        let nodes = tree.flat_nodes();
        let mut expected = Vec::new();
        // Open ancestor chain per level; a node is visible when all of them are open.
        let mut open: Vec<bool> = Vec::new();
        for node in nodes {
            open.truncate(node.level);
            if open.iter().all(|o| *o) {
                expected.push(node.key.clone());
            }
            open.push(node.expanded);
        }
        let visible: Vec<_> = tree.visible().iter().map(|n| n.key.clone()).collect();
        prop_assert_eq!(visible, expected);
    }

    /// PROPERTY: expand_all shows every node; collapse_all leaves only roots.
    #[test]
    fn property_bulk_expansion(forest in forest()) {
        let roots = forest.len();
        let mut tree = collapsed_tree();
        tree.initialize(forest);

        tree.expand_all();
        prop_assert_eq!(tree.visible_len(), tree.flat_nodes().len());

        tree.collapse_all();
        prop_assert_eq!(tree.visible_len(), roots);
    }
}
