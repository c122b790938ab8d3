//! Application Layer
//!
//! Per-widget controllers that orchestrate the domain services.
//!
//! - `TreeDataStore` - authoritative forest + filter term -> derived view
//! - `SelectionController` - click/shift/ctrl selection and drag payloads
//! - `PrincipalTree` - tree widget controller (store, flattener, selection, loads)
//! - `PermissionTable` - table widget controller with per-entry action scopes
//! - `SelectionTransfer` - send/receive contract between the two

pub mod load;
pub mod selection;
pub mod store;
pub mod table;
pub mod transfer;
pub mod tree;

pub use load::{LoadGeneration, LoadOutcome, LoadTicket};
pub use selection::{SelectionController, SelectionEvent};
pub use store::{DerivedView, IntegrityIssue, TreeDataStore};
pub use table::{PermissionEntry, PermissionTable};
pub use transfer::{transfer, SelectionTransfer, TransferReport};
pub use tree::{PrincipalTree, TreeOptions};
