//! Console Event Sink
//!
//! Human-readable event lines for interactive use.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{PersonEvent, PersonEventSink};

/// Event sink that prints one plain-text line per event
pub struct ConsoleEventSink {
    verbosity: Verbosity,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    /// Console sink on stderr
    pub fn stderr(verbosity: Verbosity) -> Self {
        Self::with_writer(verbosity, io::stderr())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbosity: Verbosity, writer: W) -> Self {
        Self {
            verbosity,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn should_print(&self, event: &PersonEvent) -> bool {
        match self.verbosity {
            Verbosity::Quiet => matches!(
                event,
                PersonEvent::CreateRejected { .. } | PersonEvent::AgeChangeRejected { .. }
            ),
            Verbosity::Normal => !event.is_detail(),
            Verbosity::Verbose => true,
        }
    }
}

fn render(event: &PersonEvent) -> String {
    match event {
        PersonEvent::Created { name, age, policy } => {
            format!("created {name} (age {age}, policy {policy})")
        }
        PersonEvent::CreateRejected { name, error, .. } => {
            format!("✗ could not create {name}: {error}")
        }
        PersonEvent::Aged { name, from, to } => format!("{name} aged {from} → {to}"),
        PersonEvent::AgeChanged { name, from, to } => {
            format!("{name} age changed {from} → {to}")
        }
        PersonEvent::AgeChangeRejected {
            name,
            requested,
            reason,
            ..
        } => format!("✗ {name} cannot change age to {requested}: {reason}"),
    }
}

impl PersonEventSink for ConsoleEventSink {
    fn on_event(&self, event: PersonEvent) {
        if !self.should_print(&event) {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", render(&event));
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }
}
