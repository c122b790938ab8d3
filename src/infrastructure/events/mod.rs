//! Event sink implementations
//!
//! - `TracingEventSink`: forwards events to `tracing`
//! - `JsonEventSink`: NDJSON on stdout for scripting

mod json;
mod tracing_sink;

pub use json::JsonEventSink;
pub use tracing_sink::TracingEventSink;
