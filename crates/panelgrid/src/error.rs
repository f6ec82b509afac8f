//! Error types for Panelgrid operations.
//!
//! This module provides the main error type [`PanelGridError`] which wraps
//! the conditions that can stop a diagram from being produced. Layout itself
//! cannot fail; every variant is raised either at the input boundary or while
//! writing the document.

use std::io;

use thiserror::Error;

use panelgrid_core::template::ParseLayoutKindError;

/// The main error type for Panelgrid operations.
#[derive(Debug, Error)]
pub enum PanelGridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid grid size {width}x{height}: width and height must be greater than 0")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("Grid size {width}x{height} exceeds the limit of {} panels per sheet", crate::grid::MAX_PANELS)]
    GridTooLarge { width: i64, height: i64 },

    #[error(transparent)]
    LayoutKind(#[from] ParseLayoutKindError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}
