//! Presentation Layer
//!
//! Rendering of deploy progress, results and errors for the CLI.

pub mod output;

pub use output::{
    create_renderer, print_error, DeployReportRenderer, JsonRenderer, OutputFormat,
    TextEventSink, TextRenderer,
};
