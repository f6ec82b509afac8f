//! Command-line argument definitions for the Panelgrid CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the grid size, the card template, where
//! the document goes, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Panelgrid sheet generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of panels across
    #[arg(allow_negative_numbers = true)]
    pub width: i64,

    /// Number of panels down
    #[arg(allow_negative_numbers = true)]
    pub height: i64,

    /// Card template, `2x3` or `3x2` (defaults to the configured template)
    #[arg(short, long)]
    pub layout: Option<String>,

    /// Path to the output file (defaults to "<panels> <descriptor>.<extension>")
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<String>,

    /// Write the document to standard output instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
