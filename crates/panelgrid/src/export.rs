pub mod drawio;

use thiserror::Error;

use panelgrid_core::panel::Panel;

/// Serializes a laid-out panel sequence into a document.
pub trait Exporter {
    fn export(&self, panels: &[Panel]) -> Result<String, Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("Style error: {0}")]
    Style(String),
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::Render(err.to_string())
    }
}
