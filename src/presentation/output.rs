//! Output Rendering
//!
//! Text and NDJSON rendering of deploy progress, reports and errors.

use std::io::{self, Write};

use is_terminal::IsTerminal;

use crate::application::DeployReport;
use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// NDJSON events for scripting
    Json,
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    arrow: &'static str,
    skip: &'static str,
    dry: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            arrow: "→",
            skip: "○",
            dry: "◌",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            arrow: "->",
            skip: "[ ]",
            dry: "[DRY RUN]",
        }
    }

    fn for_unicode(unicode: bool) -> Self {
        if unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Unicode output only on an interactive terminal
pub fn detect_unicode() -> bool {
    io::stdout().is_terminal() && std::env::var_os("DEPLOY_LOCAL_ASCII").is_none()
}

/// Trait for rendering deploy reports
pub trait DeployReportRenderer {
    fn render(&self, report: &DeployReport);
}

/// Text renderer for deploy reports
pub struct TextRenderer {
    pub unicode: bool,
    pub verbose: u8,
}

impl TextRenderer {
    pub fn format(&self, report: &DeployReport) -> String {
        let icons = Icons::for_unicode(self.unicode);
        let name = report
            .destination
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let mut out = String::new();

        if report.dry_run {
            out.push_str(&format!("{} Would deploy {}\n", icons.dry, name));
        } else {
            out.push_str(&format!("{} Deployed {}\n", icons.check, name));
        }
        out.push('\n');
        out.push_str(&format!("  From:  {}\n", report.source.display()));
        out.push_str(&format!("  To:    {}\n", report.destination.display()));
        out.push_str(&format!("  Build: {}\n", report.build.as_str()));

        if report.dry_run {
            if report.replaced {
                out.push_str("  An existing file would be replaced\n");
            }
            return out;
        }

        let replaced = if report.replaced {
            " (replaced existing)"
        } else {
            ""
        };
        out.push_str(&format!("  Size:  {} bytes{}\n", report.bytes, replaced));
        if let Some(mode) = report.mode {
            out.push_str(&format!("  Mode:  {:o}\n", mode));
        }
        if self.verbose > 0 {
            if let Some(hash) = &report.hash {
                out.push_str(&format!("  Hash:  {}\n", hash));
            }
        }
        out
    }
}

impl DeployReportRenderer for TextRenderer {
    fn render(&self, report: &DeployReport) {
        print!("{}", self.format(report));
    }
}

/// NDJSON renderer: emits the final `complete` event
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn to_json(report: &DeployReport) -> serde_json::Value {
        serde_json::json!({
            "event": "complete",
            "command": "deploy",
            "status": if report.dry_run { "dry_run" } else { "success" },
            "source": report.source.display().to_string(),
            "destination": report.destination.display().to_string(),
            "build": report.build.as_str(),
            "bytes": report.bytes,
            "replaced": report.replaced,
            "hash": report.hash.as_ref().map(|h| h.to_string()),
            "mode": report.mode.map(|m| format!("{:o}", m)),
            "finished_at": report.finished_at.to_rfc3339(),
        })
    }
}

impl DeployReportRenderer for JsonRenderer {
    fn render(&self, report: &DeployReport) {
        let _ = emit(&Self::to_json(report));
    }
}

/// Create a renderer based on format
pub fn create_renderer(
    format: OutputFormat,
    unicode: bool,
    verbose: u8,
) -> Box<dyn DeployReportRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer { unicode, verbose }),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Progress lines for text mode
pub struct TextEventSink {
    unicode: bool,
}

impl TextEventSink {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    pub fn format_event(&self, event: &DeployEvent) -> Option<String> {
        let icons = Icons::for_unicode(self.unicode);
        match event {
            DeployEvent::Started { project_root, .. } => {
                Some(format!("Project: {}", project_root.display()))
            }
            DeployEvent::BuildStarted { command } => {
                Some(format!("{} Building: {}", icons.arrow, command))
            }
            DeployEvent::BuildSkipped { reason } => {
                Some(format!("{} Build skipped ({})", icons.skip, reason))
            }
            DeployEvent::BuildFinished { .. }
            | DeployEvent::Copied { .. }
            | DeployEvent::PermissionsSet { .. } => None,
        }
    }
}

impl DeployEventSink for TextEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Some(line) = self.format_event(&event) {
            println!("{}", line);
        }
    }
}

/// Write a single NDJSON event (one JSON object per line)
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

/// Convenience helper that writes to stdout
pub fn emit(event: &serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

pub fn format_error(err: &anyhow::Error) -> String {
    let mut message = format!("[ERROR] {}\n", err);
    for cause in err.chain().skip(1) {
        message.push_str(&format!("  caused by: {}\n", cause));
    }
    message
}

/// Report a failure on stderr, or as an `error` event in JSON mode
pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "command": "deploy",
            "message": format!("{:#}", err),
        });
        let _ = emit(&output);
        return;
    }

    eprint!("{}", format_error(err));
}
