//! Principal kind value object - the closed set of manageable security identities

use serde::{Deserialize, Serialize};

/// Kind of a security principal
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    User,
    Group,
    Role,
    /// Only present in multi-tenant mode
    Organization,
}

/// Display metadata for one principal kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindInfo {
    pub label: &'static str,
    pub plural: &'static str,
    pub icon: &'static str,
    pub icon_ascii: &'static str,
}

/// Single lookup table for every kind-dependent label and icon.
static KIND_TABLE: [(PrincipalKind, KindInfo); 4] = [
    (
        PrincipalKind::User,
        KindInfo {
            label: "User",
            plural: "Users",
            icon: "👤",
            icon_ascii: "[u]",
        },
    ),
    (
        PrincipalKind::Group,
        KindInfo {
            label: "Group",
            plural: "Groups",
            icon: "👥",
            icon_ascii: "[g]",
        },
    ),
    (
        PrincipalKind::Role,
        KindInfo {
            label: "Role",
            plural: "Roles",
            icon: "🛡",
            icon_ascii: "[r]",
        },
    ),
    (
        PrincipalKind::Organization,
        KindInfo {
            label: "Organization",
            plural: "Organizations",
            icon: "🏢",
            icon_ascii: "[o]",
        },
    ),
];

impl PrincipalKind {
    pub const ALL: [PrincipalKind; 4] = [
        PrincipalKind::User,
        PrincipalKind::Group,
        PrincipalKind::Role,
        PrincipalKind::Organization,
    ];

    pub fn info(&self) -> &'static KindInfo {
        // The table is indexed in declaration order.
        &KIND_TABLE[*self as usize].1
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    pub fn plural(&self) -> &'static str {
        self.info().plural
    }

    pub fn icon(&self, supports_unicode: bool) -> &'static str {
        let info = self.info();
        if supports_unicode {
            info.icon
        } else {
            info.icon_ascii
        }
    }

    /// Parse a kind from its lowercase name (`user`, `groups`, `org`, ...)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "user" | "users" => Some(PrincipalKind::User),
            "group" | "groups" => Some(PrincipalKind::Group),
            "role" | "roles" => Some(PrincipalKind::Role),
            "organization" | "organizations" | "org" => Some(PrincipalKind::Organization),
            _ => None,
        }
    }
}

impl std::fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}
