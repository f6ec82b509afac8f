//! Panelgrid - card and panel grid sheets for draw.io.
//!
//! A sheet is a `width` x `height` grid of labeled panels, grouped into cards
//! of six panels (2x3 or 3x2). Each card gets its own pastel color and each
//! panel a `card.index` label. The result is written as a draw.io document.

pub mod config;
pub mod export;
pub mod layout;

mod error;
mod grid;

pub use panelgrid_core::{color, geometry, panel, template};
pub use panelgrid_core::template::LayoutKind;

pub use error::PanelGridError;
pub use grid::{GridSpec, MAX_PANELS};

use log::{debug, info};

use panelgrid_core::panel::Panel;

use config::AppConfig;
use export::{Exporter, drawio::DrawioExporter};
use layout::LayoutEngine;

/// Builder for laying out and rendering panel grids.
///
/// # Examples
///
/// ```rust
/// use panelgrid::{DiagramBuilder, GridSpec, LayoutKind, config::AppConfig};
///
/// let builder = DiagramBuilder::new(AppConfig::default());
/// let spec = GridSpec::new(3, 2, LayoutKind::TwoByThree)
///     .expect("3x2 is a valid grid");
///
/// // Lay out the panels...
/// let panels = builder.layout(&spec);
/// assert_eq!(panels.len(), 6);
///
/// // ...then render them
/// let xml = builder.render_drawio(&panels)
///     .expect("Failed to render");
/// assert!(xml.contains(r#"value="1.6""#));
///
/// // Or do both at once with the default config
/// let xml = DiagramBuilder::default().generate(&spec).expect("Failed to generate");
/// assert!(xml.ends_with("</mxfile>"));
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including spacing and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Compute the panels of a grid in emission order.
    ///
    /// Layout cannot fail once a [`GridSpec`] exists.
    pub fn layout(&self, spec: &GridSpec) -> Vec<Panel> {
        info!(
            width = spec.width(),
            height = spec.height(),
            kind:% = spec.kind();
            "Laying out panel grid"
        );

        let engine = LayoutEngine::new(self.config.layout().spacing());
        engine.compute(spec)
    }

    /// Render panels to a draw.io document string.
    ///
    /// # Errors
    ///
    /// Returns `PanelGridError` if the configured style is invalid or the
    /// document cannot be written.
    pub fn render_drawio(&self, panels: &[Panel]) -> Result<String, PanelGridError> {
        let exporter = DrawioExporter::new(self.config.style())?;
        let document = exporter.export(panels)?;

        info!(panels_count = panels.len(); "draw.io document rendered");
        Ok(document)
    }

    /// Lay out and render a grid in one step.
    ///
    /// # Errors
    ///
    /// Same as [`DiagramBuilder::render_drawio`].
    pub fn generate(&self, spec: &GridSpec) -> Result<String, PanelGridError> {
        let panels = self.layout(spec);
        debug!(panels_count = panels.len(); "Layout ready for export");
        self.render_drawio(&panels)
    }
}
