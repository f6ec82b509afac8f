//! Error adapter for converting PanelGridError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. None of the
//! library errors carry source spans, so each one becomes a single report
//! with an error code and, where the user can act on it, a help line.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use panelgrid::PanelGridError;

/// Adapter presenting a [`PanelGridError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a PanelGridError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            PanelGridError::Io(_) => "panelgrid::io",
            PanelGridError::InvalidDimensions { .. } | PanelGridError::GridTooLarge { .. } => {
                "panelgrid::dimensions"
            }
            PanelGridError::LayoutKind(_) => "panelgrid::layout",
            PanelGridError::Config(_) => "panelgrid::config",
            PanelGridError::Export(_) => "panelgrid::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            PanelGridError::InvalidDimensions { .. } => {
                "pass a width and height of at least 1, e.g. `panelgrid 6 4`"
            }
            PanelGridError::GridTooLarge { .. } => "split the sheet into several smaller grids",
            PanelGridError::LayoutKind(_) => "use `--layout 2x3` or `--layout 3x2`",
            PanelGridError::Config(_) => "check the file passed with `--config`",
            PanelGridError::Io(_) | PanelGridError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`PanelGridError`] into a reportable diagnostic.
pub fn to_reportable(err: &PanelGridError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use panelgrid::LayoutKind;

    use super::*;

    #[test]
    fn test_invalid_dimensions_report() {
        let err = PanelGridError::InvalidDimensions {
            width: 0,
            height: 3,
        };
        let reportable = to_reportable(&err);

        assert_eq!(
            reportable.to_string(),
            "Invalid grid size 0x3: width and height must be greater than 0"
        );
        assert_eq!(
            reportable.code().map(|c| c.to_string()).as_deref(),
            Some("panelgrid::dimensions")
        );
        assert!(reportable.help().is_some());
    }

    #[test]
    fn test_layout_kind_report() {
        let err: PanelGridError = "4x1".parse::<LayoutKind>().unwrap_err().into();
        let reportable = to_reportable(&err);

        assert!(reportable.to_string().contains("4x1"));
        assert_eq!(
            reportable.code().map(|c| c.to_string()).as_deref(),
            Some("panelgrid::layout")
        );
        assert!(
            reportable
                .help()
                .is_some_and(|h| h.to_string().contains("--layout"))
        );
    }

    #[test]
    fn test_io_error_has_no_help() {
        let err = PanelGridError::Io(std::io::Error::other("disk full"));
        let reportable = to_reportable(&err);

        assert_eq!(reportable.to_string(), "I/O error: disk full");
        assert!(reportable.help().is_none());
        assert!(reportable.labels().is_none());
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = PanelGridError::Config("Missing configuration file: x.toml".to_string());
        let mut out = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &to_reportable(&err))
            .unwrap();

        assert!(out.contains("panelgrid::config"));
        assert!(out.contains("Missing configuration file"));
    }
}
