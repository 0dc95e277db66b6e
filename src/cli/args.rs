use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "cscan", version, about = "Heuristic quality scanner for C-like source")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Print warnings about skipped files and config problems
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze files, directories, or stdin
    Check(CheckArgs),
    /// Analyze the built-in sample program
    Demo {
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Write a default cscan.toml in the current directory
    Init,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files or directories to scan (defaults to the current directory)
    pub paths: Vec<PathBuf>,
    /// Read source from stdin instead of the filesystem
    #[arg(long, conflicts_with = "paths")]
    pub stdin: bool,
    /// Output format (overrides `preferences.format`)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Exit non-zero when any diagnostic is reported
    #[arg(long)]
    pub strict: bool,
}
