use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line interface for the bootcore shim.
#[derive(Parser, Debug, Default)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Marker file name identifying the project root.
    #[arg(long)]
    pub marker: Option<String>,
    /// Subdirectory reported alongside the resolved root.
    #[arg(long)]
    pub subdir: Option<String>,
    /// Starting path for root resolution (defaults to the running
    /// executable).
    #[arg(long)]
    pub from: Option<PathBuf>,
    /// Engine command started on initialize.
    #[arg(long)]
    pub engine: Option<String>,
    /// Argument passed to the engine command (repeatable).
    #[arg(long = "engine-arg")]
    pub engine_args: Vec<String>,
    /// Enable or disable logging (true/false).
    #[arg(long)]
    pub logging: Option<bool>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Serve the request channel on stdio.
    #[default]
    Serve,
    /// Resolve and print the development root.
    Root,
}
