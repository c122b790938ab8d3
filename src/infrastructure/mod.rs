//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! - `forest/` - file-backed `ForestLoader` (JSON, YAML)
//! - `events/` - `TreeEventSink` implementations (tracing, NDJSON)

pub mod events;
pub mod forest;

pub use events::{JsonEventSink, TracingEventSink};
pub use forest::FsForestLoader;
