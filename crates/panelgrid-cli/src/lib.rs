//! CLI logic for the Panelgrid sheet generator.
//!
//! This module contains the core CLI logic: it resolves the configuration,
//! validates the requested grid, and writes the generated document.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{
    fs,
    io::{self, Write},
};

use log::info;

use panelgrid::{DiagramBuilder, GridSpec, LayoutKind, PanelGridError};

/// Run the Panelgrid CLI application
///
/// Builds the grid described by `args` and writes the draw.io document to
/// standard output, the `--output` path, or the conventional file name.
///
/// # Errors
///
/// Returns `PanelGridError` for:
/// - Configuration loading errors
/// - Non-positive or oversized grid dimensions
/// - Unrecognized layout tags
/// - Rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), PanelGridError> {
    info!(
        width = args.width,
        height = args.height,
        layout:? = args.layout;
        "Generating panel sheet"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let kind = match &args.layout {
        Some(tag) => tag.parse::<LayoutKind>()?,
        None => app_config.layout().default_kind(),
    };

    let spec = GridSpec::new(args.width, args.height, kind)?;
    let builder = DiagramBuilder::new(app_config);
    let document = builder.generate(&spec)?;

    if args.stdout {
        let mut stdout = io::stdout().lock();
        stdout.write_all(document.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| spec.file_name(builder.config().output()));
    fs::write(&output_path, document)?;

    info!(output_file = output_path; "draw.io document exported successfully");

    Ok(())
}
