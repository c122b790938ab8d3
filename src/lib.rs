//! principal-tree - hierarchical principal tree controller
//!
//! Keeps a tree of users, groups, roles and organizations stable across full
//! data reloads: filtering, flattening with expand state that survives
//! replacement, multi-selection with shift ranges and ctrl toggles, and an
//! exchange protocol between a tree and a permission table.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    transfer, PermissionEntry, PermissionTable, PrincipalTree, SelectionController,
    SelectionTransfer, TransferReport, TreeDataStore, TreeOptions,
};
pub use config::Config;
pub use domain::entities::{FlatNode, PrincipalNode};
pub use domain::ports::{ForestLoader, LoadError, LoadScope, TreeEvent, TreeEventSink};
pub use domain::services::{promote_read_only, Flattener, RelevanceRank, SearchRank};
pub use domain::value_objects::{Modifiers, PrincipalId, PrincipalKey, PrincipalKind};
pub use error::{TreeError, TreeResult};
pub use infrastructure::{FsForestLoader, JsonEventSink, TracingEventSink};
