//! Reusable forests.

use principal_tree::{PrincipalKey, PrincipalKind, PrincipalNode};

pub fn user(name: &str) -> PrincipalNode {
    PrincipalNode::new(name, PrincipalKind::User)
}

pub fn group(name: &str, children: Vec<PrincipalNode>) -> PrincipalNode {
    PrincipalNode::new(name, PrincipalKind::Group).with_children(children)
}

pub fn key(name: &str, kind: PrincipalKind) -> PrincipalKey {
    PrincipalNode::new(name, kind).key()
}

/// ```text
/// Users
///   alice
///   bob (read-only)
/// Groups
///   eng
///     carol
///     dave
///   contractors (read-only)
///     erin
///     frank (read-only)
/// ```
pub fn sample_forest() -> Vec<PrincipalNode> {
    vec![
        PrincipalNode::folder(PrincipalKind::User)
            .with_children(vec![user("alice"), user("bob").read_only()]),
        PrincipalNode::folder(PrincipalKind::Group).with_children(vec![
            group("eng", vec![user("carol"), user("dave")]),
            group("contractors", vec![user("erin"), user("frank").read_only()]).read_only(),
        ]),
    ]
}

pub fn names(nodes: &[PrincipalNode]) -> Vec<String> {
    nodes.iter().map(|n| n.id.name.clone()).collect()
}

/// `sample_forest()` in the wire format
pub const SAMPLE_FOREST_JSON: &str = r#"[
  {
    "name": "Users",
    "kind": "user",
    "isRoot": true,
    "children": [
      { "name": "alice", "kind": "user", "displayName": "Alice Liddell" },
      { "name": "bob", "kind": "user", "readOnly": true }
    ]
  },
  {
    "name": "Groups",
    "kind": "group",
    "isRoot": true,
    "children": [
      {
        "name": "eng",
        "kind": "group",
        "children": [
          { "name": "carol", "kind": "user" },
          { "name": "dave", "kind": "user" }
        ]
      },
      {
        "name": "contractors",
        "kind": "group",
        "readOnly": true,
        "children": [
          { "name": "erin", "kind": "user" },
          { "name": "frank", "kind": "user", "readOnly": true }
        ]
      }
    ]
  }
]
"#;
