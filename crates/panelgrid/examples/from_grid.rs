//! Example: Building a panel sheet through the library API
//!
//! This example lays out a 7x4 grid of 3x2 cards, prints where each card
//! landed, and writes the draw.io document next to the working directory.

use panelgrid::{
    DiagramBuilder, GridSpec, LayoutKind,
    layout::LayoutEngine,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spec = GridSpec::new(7, 4, LayoutKind::ThreeByTwo)?;
    println!(
        "Grid {}x{} uses {}x{} cards of {}",
        spec.width(),
        spec.height(),
        spec.cards_wide(),
        spec.cards_high(),
        spec.kind()
    );

    // Inspect the card grid without building panels
    for card in LayoutEngine::default().cards(&spec) {
        println!(
            "  card {:>2} at ({}, {}) filled with {}",
            card.id(),
            card.origin().x(),
            card.origin().y(),
            card.color()
        );
    }

    let builder = DiagramBuilder::default();
    let panels = builder.layout(&spec);
    println!("\n{} panels laid out", panels.len());

    let xml = builder.render_drawio(&panels)?;
    let output_path = spec.file_name(builder.config().output());
    std::fs::write(&output_path, &xml)?;
    println!("Document written to: {output_path}");

    Ok(())
}
