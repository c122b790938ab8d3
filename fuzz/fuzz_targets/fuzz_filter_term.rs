#![no_main]

use libfuzzer_sys::fuzz_target;
use principal_tree::{PrincipalKind, PrincipalNode, PrincipalTree};

fuzz_target!(|data: &[u8]| {
    let Ok(term) = std::str::from_utf8(data) else {
        return;
    };

    let forest = vec![
        PrincipalNode::folder(PrincipalKind::User).with_children(vec![
            PrincipalNode::new("alice", PrincipalKind::User),
            PrincipalNode::new("alesund", PrincipalKind::User).with_display_name("ÅLESUND İ"),
        ]),
        PrincipalNode::folder(PrincipalKind::Group).with_children(vec![PrincipalNode::new(
            "eng",
            PrincipalKind::Group,
        )
        .with_children(vec![PrincipalNode::new("carol", PrincipalKind::User)])]),
    ];

    let mut tree = PrincipalTree::new();
    tree.initialize(forest);
    tree.filter(term);
    let once: Vec<_> = tree.visible().iter().map(|n| n.key.clone()).collect();
    tree.refresh();
    let again: Vec<_> = tree.visible().iter().map(|n| n.key.clone()).collect();
    assert_eq!(once, again);
});
