//! draw.io (`.drawio`) document export.
//!
//! The document holds a single diagram page whose graph model starts with the
//! two reserved cells, `0` (root) and `1` (default layer). Every panel becomes
//! one vertex cell parented to the layer, written in the order the panels are
//! given so that identical layouts produce byte-identical documents.

use std::{borrow::Cow, fmt::Write};

use log::debug;

use panelgrid_core::panel::Panel;

use crate::{
    config::StyleConfig,
    export::{Error, Exporter},
};

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<mxfile host="app.diagrams.net">
  <diagram name="Panels" id="diagram-1">
    <mxGraphModel>
      <root>
        <mxCell id="0"/>
        <mxCell id="1" parent="0"/>
"#;

const FOOTER: &str = r#"      </root>
    </mxGraphModel>
  </diagram>
</mxfile>"#;

/// Approximate bytes written per panel cell, used to presize the output.
const CELL_SIZE_HINT: usize = 280;

/// Writes panels as a draw.io document.
#[derive(Debug, Clone)]
pub struct DrawioExporter {
    /// Text style shared by every panel, appended after the fill color.
    text_style: String,
}

impl DrawioExporter {
    /// Creates an exporter using the given text style.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Style`] if the configured font color is not a valid color.
    pub fn new(style: &StyleConfig) -> Result<Self, Error> {
        let font_color = style.font_color().map_err(Error::Style)?;
        let text_style = format!(
            "fontSize={};fontStyle={};fontColor={};",
            style.font_size(),
            u8::from(style.bold()),
            escape_attr(font_color)
        );
        Ok(Self { text_style })
    }

    fn write_panel(&self, out: &mut String, panel: &Panel) -> Result<(), Error> {
        let position = panel.position();
        let size = panel.size();

        // Labels are always `N.M`, so they are written verbatim.
        writeln!(
            out,
            r#"        <mxCell id="{}" value="{}" style="shape=rectangle;fillColor={};{}" vertex="1" parent="1">"#,
            panel.id(),
            panel.label(),
            panel.color(),
            self.text_style
        )?;
        writeln!(
            out,
            r#"          <mxGeometry x="{}" y="{}" width="{}" height="{}" as="geometry"/>"#,
            position.x(),
            position.y(),
            size.width(),
            size.height()
        )?;
        writeln!(out, "        </mxCell>")?;
        Ok(())
    }
}

impl Default for DrawioExporter {
    fn default() -> Self {
        Self::new(&StyleConfig::default()).expect("default style uses a valid font color")
    }
}

impl Exporter for DrawioExporter {
    fn export(&self, panels: &[Panel]) -> Result<String, Error> {
        let mut out =
            String::with_capacity(HEADER.len() + FOOTER.len() + panels.len() * CELL_SIZE_HINT);

        out.push_str(HEADER);
        for panel in panels {
            self.write_panel(&mut out, panel)?;
        }
        out.push_str(FOOTER);

        debug!(panels_count = panels.len(), bytes = out.len(); "draw.io document written");
        Ok(out)
    }
}

/// Escapes the characters that cannot appear inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
