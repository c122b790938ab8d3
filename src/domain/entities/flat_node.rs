//! Flat node entity
//!
//! A depth-annotated projection of one `PrincipalNode` for virtualized
//! rendering. It is a view: the wrapped node in the forest stays the source of
//! truth, reachable through `path`.

use serde::Serialize;

use crate::domain::entities::PrincipalNode;
use crate::domain::value_objects::{PrincipalKey, PrincipalKind};

#[derive(Debug, Clone, Serialize)]
pub struct FlatNode {
    pub key: PrincipalKey,
    pub label: String,
    /// Depth level (0 = forest root)
    pub level: usize,
    pub expandable: bool,
    pub expanded: bool,
    pub read_only: bool,
    pub is_root: bool,
    /// Child indices from the forest root down to this node
    #[serde(skip)]
    pub path: Vec<usize>,
}

impl FlatNode {
    pub fn from_node(node: &PrincipalNode, level: usize, path: Vec<usize>) -> Self {
        let expandable = node.is_expandable();
        Self {
            key: node.key(),
            label: node.display_name().to_string(),
            level,
            expandable,
            expanded: expandable && node.expanded,
            read_only: node.read_only,
            is_root: node.is_root,
            path,
        }
    }

    pub fn kind(&self) -> PrincipalKind {
        self.key.kind
    }

    /// Concrete, writable principals are the only ones that may be transferred
    pub fn is_transferable(&self) -> bool {
        !self.read_only && !self.is_root
    }
}

impl PartialEq for FlatNode {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FlatNode {}
