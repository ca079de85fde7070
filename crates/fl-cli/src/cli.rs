//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Framelint - a static analyzer for pandas DataFrame column usage
#[derive(Parser, Debug)]
#[command(name = "fl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check Python files for invalid DataFrame column usage
    Check(CheckArgs),
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files, directories, or glob patterns to check (default: project directory)
    pub paths: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "rich")]
    pub output: CheckOutput,

    /// Disable terminal colors
    #[arg(long)]
    pub no_color: bool,

    /// Additional exclusion patterns
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Do not recurse into directories
    #[arg(long)]
    pub non_recursive: bool,
}

/// Check output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutput {
    /// Colored output with source context
    Rich,
    /// One location-prefixed message per diagnostic
    Plain,
    /// JSON results envelope
    Json,
}
