//! JSON Event Sink
//!
//! Outputs tree events as NDJSON for scripts driving the `ptree` binary.

use std::io::{self, Write};
use std::sync::Mutex;

use serde_json::json;

use crate::domain::ports::{TreeEvent, TreeEventSink};

/// Event sink that writes one JSON object per line
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn keys_json(keys: &[crate::domain::value_objects::PrincipalKey]) -> Vec<String> {
    keys.iter().map(ToString::to_string).collect()
}

impl TreeEventSink for JsonEventSink {
    fn on_event(&self, event: TreeEvent) {
        let json = match event {
            TreeEvent::ViewRecomputed {
                origin,
                generation,
                roots,
                nodes,
            } => json!({
                "event": "view_recomputed",
                "origin": origin,
                "generation": generation,
                "roots": roots,
                "nodes": nodes,
            }),
            TreeEvent::ExpandRestored { restored, dropped } => json!({
                "event": "expand_restored",
                "restored": restored,
                "dropped": dropped,
            }),
            TreeEvent::NodeSelected { key } => json!({
                "event": "node_selected",
                "key": key.to_string(),
            }),
            TreeEvent::SelectionChanged { keys } => json!({
                "event": "selection_changed",
                "keys": keys_json(&keys),
            }),
            TreeEvent::SelectionReceived { accepted, rejected } => json!({
                "event": "selection_received",
                "accepted": accepted,
                "rejected": rejected,
            }),
            TreeEvent::LoadDiscarded { ticket, current } => json!({
                "event": "load_discarded",
                "ticket": ticket,
                "current": current,
            }),
            TreeEvent::LoadFailed { scope, message } => json!({
                "event": "load_failed",
                "scope": scope,
                "error": message,
            }),
            TreeEvent::IntegrityViolation {
                id,
                first,
                conflicting,
            } => json!({
                "event": "integrity_violation",
                "id": id.to_string(),
                "first": first,
                "conflicting": conflicting,
            }),
        };
        self.write_event(json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ViewOrigin;
    use crate::domain::value_objects::{PrincipalId, PrincipalKey, PrincipalKind};
    use std::sync::Arc;

    struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sink() -> (JsonEventSink, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink = JsonEventSink::with_writer(TestWriter {
            buffer: buffer.clone(),
        });
        (sink, buffer)
    }

    fn lines(buffer: &Arc<Mutex<Vec<u8>>>) -> Vec<serde_json::Value> {
        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn view_recomputed_uses_snake_case_origin() {
        let (sink, buffer) = sink();

        sink.on_event(TreeEvent::ViewRecomputed {
            origin: ViewOrigin::FilterChanged,
            generation: 3,
            roots: 2,
            nodes: 7,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["event"], "view_recomputed");
        assert_eq!(events[0]["origin"], "filter_changed");
        assert_eq!(events[0]["nodes"], 7);
    }

    #[test]
    fn one_line_per_event() {
        let (sink, buffer) = sink();
        let key = PrincipalKey::new(PrincipalId::new("alice"), PrincipalKind::User);

        sink.on_event(TreeEvent::NodeSelected { key: key.clone() });
        sink.on_event(TreeEvent::SelectionChanged { keys: vec![key] });

        let events = lines(&buffer);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1]["keys"][0], "user:alice");
    }

    #[test]
    fn integrity_violation_names_both_kinds() {
        let (sink, buffer) = sink();

        sink.on_event(TreeEvent::IntegrityViolation {
            id: PrincipalId::scoped("ops", "acme"),
            first: PrincipalKind::Group,
            conflicting: PrincipalKind::Role,
        });

        let events = lines(&buffer);
        assert_eq!(events[0]["id"], "ops@acme");
        assert_eq!(events[0]["first"], "group");
        assert_eq!(events[0]["conflicting"], "role");
    }
}
