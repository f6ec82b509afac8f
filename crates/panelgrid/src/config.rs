//! Configuration types for Panelgrid diagram generation.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources; every field is optional and falls back to the values
//! that reproduce the standard card sheet.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Default card template and pixel [`Spacing`].
//! - [`StyleConfig`] - Panel text styling.
//! - [`OutputConfig`] - Conventional output file naming.
//!
//! # Example
//!
//! ```
//! # use panelgrid::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.style().font_size(), 16);
//! assert!(config.style().font_color().is_ok());
//! ```

use serde::Deserialize;

use panelgrid_core::{color::Color, template::LayoutKind};

use crate::layout::Spacing;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Output naming section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, style: StyleConfig, output: OutputConfig) -> Self {
        Self {
            layout,
            style,
            output,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Card template and spacing used by the layout engine.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    /// [`LayoutKind`] used when the caller does not pick one.
    #[serde(default)]
    default_kind: LayoutKind,

    /// Pixel spacing of panels and cards.
    #[serde(default)]
    spacing: Spacing,
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    pub fn new(default_kind: LayoutKind, spacing: Spacing) -> Self {
        Self {
            default_kind,
            spacing,
        }
    }

    /// Returns the default card template.
    pub fn default_kind(&self) -> LayoutKind {
        self.default_kind
    }

    /// Returns the pixel spacing.
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }
}

/// Text styling applied to every panel.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    font_size: u32,
    font_color: String,
    bold: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: 16,
            font_color: "#000000".to_string(),
            bold: true,
        }
    }
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`].
    pub fn new(font_size: u32, font_color: impl Into<String>, bold: bool) -> Self {
        Self {
            font_size,
            font_color: font_color.into(),
            bold,
        }
    }

    /// Returns the label font size in points.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Returns the configured font color string after checking it parses as a [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured string is not a valid CSS color.
    pub fn font_color(&self) -> Result<&str, String> {
        Color::new(&self.font_color)
            .map(|_| self.font_color.as_str())
            .map_err(|err| format!("Invalid font color in config: {err}"))
    }

    /// Returns whether labels are drawn bold.
    pub fn bold(&self) -> bool {
        self.bold
    }
}

/// Naming of the generated document file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    descriptor: String,
    extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            descriptor: "carduri".to_string(),
            extension: "drawio".to_string(),
        }
    }
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`].
    pub fn new(descriptor: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
            extension: extension.into(),
        }
    }

    /// Word placed after the panel count in the file name.
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// File extension, without the leading dot.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiagramBuilder, GridSpec};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout().default_kind(), LayoutKind::ThreeByTwo);
        assert_eq!(config.layout().spacing(), Spacing::default());
        assert_eq!(config.style().font_size(), 16);
        assert_eq!(config.style().font_color(), Ok("#000000"));
        assert!(config.style().bold());
        assert_eq!(config.output().descriptor(), "carduri");
        assert_eq!(config.output().extension(), "drawio");
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str(
            r#"
            [layout]
            default_kind = "2x3"

            [layout.spacing]
            card_gap = 20

            [style]
            font_color = "navy"

            [output]
            descriptor = "cards"
            "#,
        )
        .unwrap();

        assert_eq!(config.layout().default_kind(), LayoutKind::TwoByThree);
        assert_eq!(config.layout().spacing().card_gap(), 20);
        assert_eq!(config.layout().spacing().panel_width(), 80);
        assert_eq!(config.style().font_color(), Ok("navy"));
        assert_eq!(config.style().font_size(), 16);
        assert_eq!(config.output().descriptor(), "cards");
        assert_eq!(config.output().extension(), "drawio");
    }

    #[test]
    fn test_oversized_spacing_fails_to_load() {
        for field in [
            "panel_width",
            "panel_height",
            "pitch_x",
            "pitch_y",
            "card_gap",
            "origin_x",
            "origin_y",
        ] {
            let source = format!("[layout.spacing]\n{field} = 9223372036854775807");
            let err = toml::from_str::<AppConfig>(&source).unwrap_err();
            assert!(
                err.to_string().contains("exceeds the maximum spacing"),
                "{field}: {err}"
            );
        }
    }

    #[test]
    fn test_maximum_spacing_generates_document() {
        let source = format!(
            "[layout.spacing]\npitch_x = {max}\npitch_y = {max}\ncard_gap = {max}\norigin_x = {max}",
            max = Spacing::MAX_PIXELS
        );
        let config: AppConfig = toml::from_str(&source).unwrap();
        let spec = GridSpec::new(4, 2, LayoutKind::TwoByThree).unwrap();

        let doc = DiagramBuilder::new(config).generate(&spec).unwrap();
        // second card: origin + 3 * pitch + gap
        let second_card_x = 5 * Spacing::MAX_PIXELS;
        assert!(doc.contains(&format!(r#"<mxGeometry x="{second_card_x}" y="100""#)));
    }

    #[test]
    fn test_unknown_layout_kind_fails_to_load() {
        let result: Result<AppConfig, _> = toml::from_str("[layout]\ndefault_kind = \"4x4\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_font_color() {
        let style = StyleConfig::new(16, "definitely-not-a-color", true);
        let err = style.font_color().unwrap_err();
        assert!(err.contains("Invalid font color"));
    }
}
