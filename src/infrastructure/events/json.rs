//! JSON Event Sink
//!
//! Outputs person events as NDJSON for CI/automation consumption.

use crate::domain::ports::{PersonEvent, PersonEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
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

impl PersonEventSink for JsonEventSink {
    fn on_event(&self, event: PersonEvent) {
        let json = match event {
            PersonEvent::Created { name, age, policy } => {
                serde_json::json!({
                    "event": "created",
                    "name": name,
                    "age": age,
                    "policy": policy.to_string(),
                })
            }

            PersonEvent::CreateRejected { name, age, error } => {
                serde_json::json!({
                    "event": "create_rejected",
                    "name": name,
                    "age": age,
                    "error": error,
                })
            }

            PersonEvent::Aged { name, from, to } => {
                serde_json::json!({
                    "event": "aged",
                    "name": name,
                    "from": from,
                    "to": to,
                })
            }

            PersonEvent::AgeChanged { name, from, to } => {
                serde_json::json!({
                    "event": "age_changed",
                    "name": name,
                    "from": from,
                    "to": to,
                })
            }

            PersonEvent::AgeChangeRejected {
                name,
                current,
                requested,
                reason,
            } => {
                serde_json::json!({
                    "event": "age_change_rejected",
                    "name": name,
                    "current": current,
                    "requested": requested,
                    "reason": reason,
                })
            }
        };

        self.write_event(json);
    }
}
