//! Property tests for click, shift-range and ctrl-toggle selection.

use proptest::prelude::*;

use principal_tree::{Modifiers, PrincipalTree};

use crate::strategies::forest;

fn expanded_tree(forest: Vec<principal_tree::PrincipalNode>) -> PrincipalTree {
    let mut tree = PrincipalTree::new();
    tree.initialize(forest);
    tree.expand_all();
    tree
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: click at i then shift-click at j selects exactly the
    /// visible rows between them, inclusive.
    #[test]
    fn property_shift_click_selects_inclusive_range(
        forest in forest(),
        anchor in any::<prop::sample::Index>(),
        target in any::<prop::sample::Index>(),
    ) {
        let mut tree = expanded_tree(forest);
        let len = tree.visible_len();
        let (i, j) = (anchor.index(len), target.index(len));

        tree.select_at(i, Modifiers::NONE);
        tree.select_at(j, Modifiers::SHIFT);

        let (lo, hi) = (i.min(j), i.max(j));
        let expected: Vec<_> = tree.visible()[lo..=hi].iter().map(|n| n.key.clone()).collect();
        let selected: Vec<_> = tree.selection().iter().map(|n| n.key.clone()).collect();
        prop_assert_eq!(selected, expected);
    }

    /// PROPERTY: ctrl-clicking the same row twice restores the selection.
    #[test]
    fn property_ctrl_toggle_is_an_involution(
        forest in forest(),
        first in any::<prop::sample::Index>(),
        toggled in any::<prop::sample::Index>(),
    ) {
        let mut tree = expanded_tree(forest);
        let len = tree.visible_len();
        tree.select_at(first.index(len), Modifiers::NONE);
        let before: Vec<_> = tree.selection().iter().map(|n| n.key.clone()).collect();

        let row = toggled.index(len);
        tree.select_at(row, Modifiers::CTRL);
        tree.select_at(row, Modifiers::CTRL);

        let after: Vec<_> = tree.selection().iter().map(|n| n.key.clone()).collect();
        let mut before_sorted = before.clone();
        let mut after_sorted = after.clone();
        before_sorted.sort();
        after_sorted.sort();
        prop_assert_eq!(before_sorted, after_sorted);
    }

    /// PROPERTY: drag payloads never carry read-only nodes or folders.
    #[test]
    fn property_drag_payload_is_writable(
        forest in forest(),
        rows in proptest::collection::vec(any::<prop::sample::Index>(), 1..6),
    ) {
        let mut tree = expanded_tree(forest);
        let len = tree.visible_len();
        for (n, row) in rows.iter().enumerate() {
            let modifiers = if n == 0 { Modifiers::NONE } else { Modifiers::CTRL };
            tree.select_at(row.index(len), modifiers);
        }
        let dragged = tree.visible()[rows[0].index(len)].key.clone();

        for node in tree.drag_start(&dragged) {
            prop_assert!(!node.read_only && !node.is_root);
        }
    }
}
