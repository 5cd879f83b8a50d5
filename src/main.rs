//! deploy-local CLI
//!
//! Usage: deploy-local [OPTIONS] <TARGET_DIRECTORY>
//!
//! Builds the project in release mode, copies the binary into
//! TARGET_DIRECTORY and marks it executable.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;

use deploy_local::application::{DeployOptions, DeployReport, DeployUseCase};
use deploy_local::config::Config;
use deploy_local::domain::ports::DeployEventSink;
use deploy_local::domain::{BinaryName, DeploymentRequest};
use deploy_local::infrastructure::{BuildStdout, JsonEventSink, LocalInstaller, ProcessBuildRunner};
use deploy_local::presentation::output::detect_unicode;
use deploy_local::presentation::{create_renderer, print_error, OutputFormat, TextEventSink};
use deploy_local::{logging, resolve_project_root, DeployError};

use cli::Cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help / --version go to stdout and succeed; usage errors fail with 1.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    if cli.target_directory.is_none() {
        // Usage diagnostics always reach stderr, plus an error event in JSON mode.
        let err = anyhow::Error::new(DeployError::MissingTargetDirectory);
        if cli.json {
            print_error(&err, true);
        }
        print_error(&err, false);
        eprintln!("Usage: deploy-local [OPTIONS] <TARGET_DIRECTORY>");
        std::process::exit(1);
    }

    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        print_error(&err, cli.json);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let target_directory = cli
        .target_directory
        .clone()
        .ok_or(DeployError::MissingTargetDirectory)?;

    let project_root = resolve_project_root(cli.project_root.as_deref())?;
    let (config, warnings) = Config::resolve(&project_root)
        .with_context(|| format!("failed to load configuration for {}", project_root.display()))?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    let binary = match &cli.binary {
        Some(name) => BinaryName::new(name.clone())?,
        None => config.binary_name()?,
    };
    let request = DeploymentRequest::new(target_directory, project_root)
        .with_binary_name(binary)
        .with_artifact_dir(&config.artifact_dir);
    let options = deploy_options(cli, &config)?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let unicode = detect_unicode();

    let report = match format {
        OutputFormat::Json => execute(&request, &options, BuildStdout::Stderr, &JsonEventSink::stdout())?,
        OutputFormat::Text => execute(&request, &options, BuildStdout::Inherit, &TextEventSink::new(unicode))?,
    };

    create_renderer(format, unicode, cli.verbose).render(&report);
    Ok(())
}

fn deploy_options(cli: &Cli, config: &Config) -> Result<DeployOptions> {
    let mut options = config.deploy_options()?.with_dry_run(cli.dry_run);
    if cli.skip_build {
        options = options.with_skip_build(true);
    }
    Ok(options)
}

fn execute(
    request: &DeploymentRequest,
    options: &DeployOptions,
    stdout: BuildStdout,
    events: &dyn DeployEventSink,
) -> Result<DeployReport> {
    let use_case = DeployUseCase::new(ProcessBuildRunner::new(stdout), LocalInstaller::new());
    Ok(use_case.execute(request, options, events)?)
}
