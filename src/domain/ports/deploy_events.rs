//! Deploy Event Port
//!
//! Observable progress of a deploy run, consumed by the text and NDJSON
//! renderers.

use std::path::PathBuf;

/// Event emitted during a deploy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// Request resolved, pipeline about to start
    Started {
        project_root: PathBuf,
        source: PathBuf,
        destination: PathBuf,
        dry_run: bool,
    },

    /// Build command spawned
    BuildStarted { command: String },

    /// Build command exited successfully
    BuildFinished { command: String },

    /// Build was not run (skipped or dry run)
    BuildSkipped { reason: String },

    /// Artifact copied into the target directory
    Copied {
        destination: PathBuf,
        bytes: u64,
        replaced: bool,
    },

    /// Executable bits applied
    PermissionsSet { destination: PathBuf, mode: u32 },
}

/// Trait for receiving deploy events
pub trait DeployEventSink {
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingEventSink {
        events: RefCell<Vec<DeployEvent>>,
    }

    impl DeployEventSink for RecordingEventSink {
        fn on_event(&self, event: DeployEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingEventSink {
            events: RefCell::new(Vec::new()),
        };

        sink.on_event(DeployEvent::BuildStarted {
            command: "cargo build --release".to_string(),
        });
        sink.on_event(DeployEvent::BuildFinished {
            command: "cargo build --release".to_string(),
        });

        assert_eq!(sink.events.borrow().len(), 2);
    }
}
