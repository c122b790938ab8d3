//! Property tests for the recursive filter.

use proptest::prelude::*;

use principal_tree::application::store::derive;
use principal_tree::domain::services::flatten;
use principal_tree::{PrincipalNode, RelevanceRank};

use crate::strategies::{forest, pre_order, term};

fn check_survivors(nodes: &[PrincipalNode], needle: &str) -> Result<(), TestCaseError> {
    for node in nodes {
        if node.is_leaf() {
            prop_assert!(node.matches(needle), "{} does not match {}", node.id, needle);
        } else {
            prop_assert!(node.expanded, "{} kept but not opened", node.id);
            check_survivors(node.children(), needle)?;
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: filtering an already filtered forest changes nothing.
    #[test]
    fn property_filter_is_idempotent(forest in forest(), term in term()) {
        let once = derive(&forest, &term, &RelevanceRank);
        let twice = derive(&once, &term, &RelevanceRank);
        prop_assert_eq!(pre_order(&once), pre_order(&twice));
    }

    /// PROPERTY: every surviving leaf matches and every surviving inner node
    /// is open with at least one survivor below it.
    #[test]
    fn property_filter_keeps_only_matches(forest in forest(), term in term()) {
        let filtered = derive(&forest, &term, &RelevanceRank);
        check_survivors(&filtered, &term.to_lowercase())?;
    }

    /// PROPERTY: no leaf that matches is lost.
    #[test]
    fn property_filter_keeps_every_matching_leaf(forest in forest(), term in term()) {
        let needle = term.to_lowercase();
        let filtered = flatten(&derive(&forest, &term, &RelevanceRank));
        for node in flatten(&forest).iter().filter(|n| !n.expandable && n.label.to_lowercase().contains(&needle)) {
            prop_assert!(filtered.iter().any(|f| f.key == node.key), "lost {}", node.key);
        }
    }

    /// PROPERTY: the empty term passes the forest through.
    #[test]
    fn property_empty_term_is_identity(forest in forest()) {
        let derived = derive(&forest, "", &RelevanceRank);
        prop_assert_eq!(pre_order(&derived), pre_order(&forest));
    }
}
