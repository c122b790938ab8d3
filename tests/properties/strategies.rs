//! Forest generators shared by the property suites.

use proptest::prelude::*;

use principal_tree::{PrincipalKind, PrincipalNode};

/// Forests up to three levels deep with unique names: organizations `oN`,
/// groups `oNgM`, users `oNgMuK`. Some inner groups are empty.
pub fn forest() -> impl Strategy<Value = Vec<PrincipalNode>> {
    let group = (0usize..4, any::<bool>());
    let org = proptest::collection::vec(group, 0..4);
    proptest::collection::vec(org, 1..4).prop_map(build)
}

fn build(shape: Vec<Vec<(usize, bool)>>) -> Vec<PrincipalNode> {
    shape
        .into_iter()
        .enumerate()
        .map(|(o, groups)| {
            let children = groups
                .into_iter()
                .enumerate()
                .map(|(g, (users, read_only))| {
                    let members = (0..users)
                        .map(|u| PrincipalNode::new(format!("o{o}g{g}u{u}"), PrincipalKind::User))
                        .collect();
                    let node = PrincipalNode::new(format!("o{o}g{g}"), PrincipalKind::Group)
                        .with_children(members);
                    if read_only {
                        node.read_only()
                    } else {
                        node
                    }
                })
                .collect();
            PrincipalNode::new(format!("o{o}"), PrincipalKind::Organization).with_children(children)
        })
        .collect()
}

/// Terms that hit some generated names and miss others
pub fn term() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ogu0-3]{1,4}").unwrap()
}

/// Reference pre-order walk: (level, name)
pub fn pre_order(forest: &[PrincipalNode]) -> Vec<(usize, String)> {
    fn walk(nodes: &[PrincipalNode], level: usize, out: &mut Vec<(usize, String)>) {
        for node in nodes {
            out.push((level, node.id.name.clone()));
            walk(node.children(), level + 1, out);
        }
    }
    let mut out = Vec::new();
    walk(forest, 0, &mut out);
    out
}
