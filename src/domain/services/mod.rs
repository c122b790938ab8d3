//! Domain Services
//!
//! Pure tree logic: ranking, flattening, expand-state replay and read-only
//! promotion. No I/O.

mod flattener;
mod promotion;
mod search_rank;

pub use flattener::{flatten, node_at_path, ExpandSnapshot, Flattener, RestoreReport};
pub use promotion::promote_read_only;
pub use search_rank::{MatchClass, RelevanceRank, SearchRank};
