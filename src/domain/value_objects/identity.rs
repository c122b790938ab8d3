//! Principal identity value objects
//!
//! - `PrincipalId`: the (name, organization scope) pair that identifies a principal
//! - `PrincipalKey`: identity plus kind, the structural equality key of a tree node

use serde::{Deserialize, Serialize};

use super::PrincipalKind;

/// Identity of a principal: its name within an optional organization scope
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrincipalId {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
}

impl PrincipalId {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            organization: None,
        }
    }

    pub fn scoped(name: impl Into<String>, organization: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            organization: Some(organization.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl std::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.organization {
            Some(org) => write!(f, "{}@{}", self.name, org),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Structural key of a tree node: two nodes are the same node iff their keys match
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrincipalKey {
    pub id: PrincipalId,
    pub kind: PrincipalKind,
}

impl PrincipalKey {
    pub fn new(id: PrincipalId, kind: PrincipalKind) -> Self {
        Self { id, kind }
    }
}

impl std::fmt::Display for PrincipalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
