#![no_main]

use libfuzzer_sys::fuzz_target;
use principal_tree::{Modifiers, PrincipalNode, PrincipalTree};

fuzz_target!(|data: &[u8]| {
    let Ok(forest) = serde_json::from_slice::<Vec<PrincipalNode>>(data) else {
        return;
    };

    // Any forest, duplicate identities included, loads twice without panicking.
    let mut tree = PrincipalTree::new();
    tree.initialize(forest.clone());
    tree.expand_all();
    let len = tree.visible_len();
    if len > 0 {
        tree.select_at(0, Modifiers::NONE);
        tree.select_at(len - 1, Modifiers::SHIFT);
    }
    tree.initialize(forest);
    let _ = tree.picker_selection(&[]);
});
