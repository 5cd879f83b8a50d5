use std::path::PathBuf;

use clap::Parser;

/// deploy-local - build a release binary and install it into a directory
#[derive(Parser, Debug)]
#[command(name = "deploy-local")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Example: deploy-local /usr/local/bin")]
pub struct Cli {
    /// Directory to install the binary into (must already exist)
    #[arg(value_name = "TARGET_DIRECTORY")]
    pub target_directory: Option<PathBuf>,

    /// Project to build (defaults to the project this tool is installed from)
    #[arg(long, value_name = "PATH")]
    pub project_root: Option<PathBuf>,

    /// Name of the binary to deploy
    #[arg(long, value_name = "NAME")]
    pub binary: Option<String>,

    /// Deploy the existing artifact without building
    #[arg(long)]
    pub skip_build: bool,

    /// Dry run - show what would be done
    #[arg(long)]
    pub dry_run: bool,

    /// Emit NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
