//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for scripts and CI.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Event sink that writes one JSON object per line
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Write an arbitrary event object
    pub fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Serialize a deploy event as a JSON object
pub fn event_to_json(event: &DeployEvent) -> serde_json::Value {
    match event {
        DeployEvent::Started {
            project_root,
            source,
            destination,
            dry_run,
        } => serde_json::json!({
            "event": "start",
            "command": "deploy",
            "project_root": project_root.display().to_string(),
            "source": source.display().to_string(),
            "destination": destination.display().to_string(),
            "dry_run": dry_run,
        }),

        DeployEvent::BuildStarted { command } => serde_json::json!({
            "event": "build_started",
            "command": "deploy",
            "build_command": command,
        }),

        DeployEvent::BuildFinished { command } => serde_json::json!({
            "event": "build_finished",
            "command": "deploy",
            "build_command": command,
        }),

        DeployEvent::BuildSkipped { reason } => serde_json::json!({
            "event": "build_skipped",
            "command": "deploy",
            "reason": reason,
        }),

        DeployEvent::Copied {
            destination,
            bytes,
            replaced,
        } => serde_json::json!({
            "event": "copied",
            "command": "deploy",
            "destination": destination.display().to_string(),
            "bytes": bytes,
            "replaced": replaced,
        }),

        DeployEvent::PermissionsSet { destination, mode } => serde_json::json!({
            "event": "permissions_set",
            "command": "deploy",
            "destination": destination.display().to_string(),
            "mode": format!("{:o}", mode),
        }),
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        self.write_event(event_to_json(&event));
    }
}
