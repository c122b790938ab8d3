//! Property tests for expand-state replay across forest replacement.

use proptest::prelude::*;

use principal_tree::{PrincipalTree, TreeOptions};

use crate::strategies::forest;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: replacing the forest with a structurally equal one yields
    /// the same visible sequence.
    #[test]
    fn property_replacement_round_trips_expand_state(
        forest in forest(),
        expand in proptest::collection::vec(any::<prop::sample::Index>(), 0..8),
        expand_roots in any::<bool>(),
    ) {
        let mut tree = PrincipalTree::new().with_options(TreeOptions {
            expand_roots,
            ..TreeOptions::default()
        });
        tree.initialize(forest.clone());
        let keys: Vec<_> = tree.flat_nodes().iter().map(|n| n.key.clone()).collect();
        for index in expand {
            tree.expand(&keys[index.index(keys.len())]);
        }
        let before: Vec<_> = tree.visible().iter().map(|n| n.key.clone()).collect();

        tree.initialize(forest);

        let after: Vec<_> = tree.visible().iter().map(|n| n.key.clone()).collect();
        prop_assert_eq!(before, after);
    }

    /// PROPERTY: a filter round trip puts back the visible sequence the
    /// admin had before filtering.
    #[test]
    fn property_filter_then_clear_restores_visible_sequence(
        forest in forest(),
        expand in proptest::collection::vec(any::<prop::sample::Index>(), 0..8),
        term in crate::strategies::term(),
    ) {
        let roots = forest.len();
        let mut tree = PrincipalTree::new();
        tree.initialize(forest);
        let keys: Vec<_> = tree.flat_nodes().iter().map(|n| n.key.clone()).collect();
        for index in expand {
            tree.expand(&keys[index.index(keys.len())]);
        }
        let before: Vec<_> = tree.visible().iter().map(|n| n.key.clone()).collect();

        tree.filter(term);
        tree.filter("");

        let after: Vec<_> = tree.visible().iter().map(|n| n.key.clone()).collect();
        prop_assert_eq!(tree.view().len(), roots);
        prop_assert_eq!(before, after);
    }
}
