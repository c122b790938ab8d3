//! Search relevance ranking
//!
//! Orders sibling nodes for a search term: exact match first, then prefix
//! match, then substring match, each group alphabetical. Matching is
//! case-insensitive against the display name.

use std::cmp::Ordering;

use crate::domain::entities::PrincipalNode;

/// Comparator collaborator used by the filter and the data store
pub trait SearchRank: Send + Sync {
    fn rank(&self, term: &str, a: &PrincipalNode, b: &PrincipalNode) -> Ordering;
}

/// How a name matches a search term, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchClass {
    Exact,
    Prefix,
    Substring,
    None,
}

impl MatchClass {
    /// Both arguments must already be lowercase
    pub fn of(needle: &str, name: &str) -> Self {
        if name == needle {
            MatchClass::Exact
        } else if name.starts_with(needle) {
            MatchClass::Prefix
        } else if name.contains(needle) {
            MatchClass::Substring
        } else {
            MatchClass::None
        }
    }
}

/// Default exact > prefix > substring ranking
#[derive(Debug, Clone, Copy, Default)]
pub struct RelevanceRank;

impl SearchRank for RelevanceRank {
    fn rank(&self, term: &str, a: &PrincipalNode, b: &PrincipalNode) -> Ordering {
        let needle = term.to_lowercase();
        let a_name = a.display_name().to_lowercase();
        let b_name = b.display_name().to_lowercase();

        MatchClass::of(&needle, &a_name)
            .cmp(&MatchClass::of(&needle, &b_name))
            .then_with(|| a_name.cmp(&b_name))
            .then_with(|| a.display_name().cmp(b.display_name()))
    }
}
