//! Principal node entity
//!
//! One principal (user, group, role, organization) or a synthetic grouping
//! folder, with its ordered children. Forests of these nodes are always
//! replaced wholesale by the loader, so equality is structural: two nodes are
//! equal iff their identity and kind match, whatever instance they live in.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::services::SearchRank;
use crate::domain::value_objects::{PrincipalId, PrincipalKey, PrincipalKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincipalNode {
    #[serde(flatten)]
    pub id: PrincipalId,
    pub kind: PrincipalKind,
    /// Label shown to the admin; falls back to the identity name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// `None` for leaves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PrincipalNode>>,
    /// Inherited from an outer scope: not selectable for transfer
    #[serde(default)]
    pub read_only: bool,
    /// Synthetic top-level folder ("Users", "Groups", ...)
    #[serde(default)]
    pub is_root: bool,
    /// Never read from data; only the flattener and filter set it
    #[serde(skip)]
    pub expanded: bool,
}

impl PrincipalNode {
    pub fn new(name: impl Into<String>, kind: PrincipalKind) -> Self {
        Self {
            id: PrincipalId::new(name),
            kind,
            display_name: None,
            children: None,
            read_only: false,
            is_root: false,
            expanded: false,
        }
    }

    /// Synthetic top-level folder labelled with the kind's plural
    pub fn folder(kind: PrincipalKind) -> Self {
        let mut node = Self::new(kind.plural(), kind);
        node.is_root = true;
        node.children = Some(Vec::new());
        node
    }

    pub fn in_organization(mut self, organization: impl Into<String>) -> Self {
        self.id.organization = Some(organization.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_children(mut self, children: Vec<PrincipalNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn add_child(&mut self, child: PrincipalNode) {
        self.children.get_or_insert_with(Vec::new).push(child);
    }

    pub fn key(&self) -> PrincipalKey {
        PrincipalKey::new(self.id.clone(), self.kind)
    }

    pub fn has_key(&self, key: &PrincipalKey) -> bool {
        self.kind == key.kind && self.id == key.id
    }

    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id.name)
    }

    /// Non-null, non-empty children
    pub fn is_expandable(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    pub fn is_leaf(&self) -> bool {
        !self.is_expandable()
    }

    pub fn children(&self) -> &[PrincipalNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Total nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Pre-order search for the first node with the given key
    pub fn find(&self, key: &PrincipalKey) -> Option<&PrincipalNode> {
        if self.has_key(key) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(key))
    }

    /// Case-insensitive substring match against the display name.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.display_name().to_lowercase().contains(needle)
    }

    /// Filter this subtree by `term`.
    ///
    /// Returns a new node whose children are the surviving, relevance-sorted
    /// matches. A leaf survives when its name matches; an inner node survives
    /// when at least one child survives and is then forced open so the
    /// matches are visible. An empty term returns the node unmodified.
    pub fn filter(&self, term: &str, rank: &dyn SearchRank) -> Option<PrincipalNode> {
        if term.is_empty() {
            return Some(self.clone());
        }
        let needle = term.to_lowercase();
        self.filter_with(term, &needle, rank)
    }

    fn filter_with(&self, term: &str, needle: &str, rank: &dyn SearchRank) -> Option<PrincipalNode> {
        if self.is_leaf() {
            return self.matches(needle).then(|| self.clone());
        }

        let mut kept: Vec<PrincipalNode> = self
            .children()
            .iter()
            .filter_map(|child| child.filter_with(term, needle, rank))
            .collect();
        if kept.is_empty() {
            return None;
        }
        kept.sort_by(|a, b| rank.rank(term, a, b));

        Some(PrincipalNode {
            id: self.id.clone(),
            kind: self.kind,
            display_name: self.display_name.clone(),
            children: Some(kept),
            read_only: self.read_only,
            is_root: self.is_root,
            expanded: true,
        })
    }
}

impl PartialEq for PrincipalNode {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.id == other.id
    }
}

impl Eq for PrincipalNode {}

impl Hash for PrincipalNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.kind.hash(state);
    }
}
