//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod forest_loader;
pub mod tree_events;

pub use forest_loader::{ForestLoader, LoadError, LoadScope};
pub use tree_events::{NoopEventSink, TreeEvent, TreeEventSink, ViewOrigin};
