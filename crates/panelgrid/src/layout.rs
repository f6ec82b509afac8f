//! Panel layout.
//!
//! The [`LayoutEngine`] maps a [`GridSpec`] onto cards and panels:
//!
//! 1. Cards are visited column-major: every vertical card position of the
//!    first card column, top to bottom, then the next card column.
//! 2. Inside a card, panels are visited row-major.
//! 3. Panels whose global position falls outside the requested grid are
//!    dropped; they never consume an identifier.
//! 4. Remaining panels are numbered in visiting order starting at
//!    [`FIRST_PANEL_ID`].

use log::{debug, trace};
use serde::{Deserialize, Deserializer, de};

use panelgrid_core::{
    geometry::{Point, Size},
    panel::{Card, Cell, FIRST_PANEL_ID, Panel, PanelLabel, PanelSlot},
    template::LayoutKind,
};

use crate::grid::GridSpec;

/// Pixel spacing of panels and cards.
///
/// The defaults place 80x40 panels on an 85x45 pitch, leave 5 extra pixels
/// between neighbouring cards, and start the first card at `(100, 100)`.
///
/// Every value is at most [`Spacing::MAX_PIXELS`]. Together with
/// [`MAX_PANELS`](crate::grid::MAX_PANELS) this keeps every panel position
/// well inside `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Spacing {
    #[serde(deserialize_with = "bounded_pixels")]
    panel_width: u64,
    #[serde(deserialize_with = "bounded_pixels")]
    panel_height: u64,
    #[serde(deserialize_with = "bounded_pixels")]
    pitch_x: u64,
    #[serde(deserialize_with = "bounded_pixels")]
    pitch_y: u64,
    #[serde(deserialize_with = "bounded_pixels")]
    card_gap: u64,
    #[serde(deserialize_with = "bounded_pixels")]
    origin_x: u64,
    #[serde(deserialize_with = "bounded_pixels")]
    origin_y: u64,
}

/// Rejects spacing values above [`Spacing::MAX_PIXELS`].
fn bounded_pixels<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = u64::deserialize(deserializer)?;
    if value > Spacing::MAX_PIXELS {
        return Err(de::Error::custom(format!(
            "{value} exceeds the maximum spacing of {} pixels",
            Spacing::MAX_PIXELS
        )));
    }
    Ok(value)
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            panel_width: 80,
            panel_height: 40,
            pitch_x: 85,
            pitch_y: 45,
            card_gap: 5,
            origin_x: 100,
            origin_y: 100,
        }
    }
}

impl Spacing {
    /// Largest accepted value for any spacing field.
    pub const MAX_PIXELS: u64 = 100_000;

    /// Returns the panel width
    pub fn panel_width(&self) -> u64 {
        self.panel_width
    }

    /// Returns the panel height
    pub fn panel_height(&self) -> u64 {
        self.panel_height
    }

    /// Returns the extra gap between adjacent cards
    pub fn card_gap(&self) -> u64 {
        self.card_gap
    }

    /// Sets the extra gap between adjacent cards, clamped to [`Spacing::MAX_PIXELS`]
    pub fn with_card_gap(mut self, card_gap: u64) -> Self {
        self.card_gap = card_gap.min(Self::MAX_PIXELS);
        self
    }

    /// Sets the top-left corner of the first card, clamped to [`Spacing::MAX_PIXELS`]
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin_x = origin.x().min(Self::MAX_PIXELS);
        self.origin_y = origin.y().min(Self::MAX_PIXELS);
        self
    }

    fn panel_size(&self) -> Size {
        Size::new(self.panel_width, self.panel_height)
    }

    /// Horizontal distance between the origins of adjacent cards.
    fn card_pitch_x(&self, kind: LayoutKind) -> u64 {
        u64::from(kind.card_cols()) * self.pitch_x + self.card_gap
    }

    /// Vertical distance between the origins of adjacent cards.
    fn card_pitch_y(&self, kind: LayoutKind) -> u64 {
        u64::from(kind.card_rows()) * self.pitch_y + self.card_gap
    }
}

/// Computes card and panel placement for a grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine {
    spacing: Spacing,
}

impl LayoutEngine {
    /// Creates an engine with the given spacing.
    pub fn new(spacing: Spacing) -> Self {
        Self { spacing }
    }

    /// Returns the spacing this engine places panels with.
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Lays out every panel of `spec`, in emission order.
    ///
    /// Returns exactly `width * height` panels with identifiers
    /// `FIRST_PANEL_ID..FIRST_PANEL_ID + width * height`.
    pub fn compute(&self, spec: &GridSpec) -> Vec<Panel> {
        debug!(
            width = spec.width(),
            height = spec.height(),
            kind:% = spec.kind(),
            cards_wide = spec.cards_wide(),
            cards_high = spec.cards_high();
            "Computing panel layout"
        );

        let panels: Vec<Panel> = self
            .cards(spec)
            .flat_map(|card| self.panel_slots(spec, card))
            .zip(FIRST_PANEL_ID..)
            .map(|(slot, id)| Panel::new(id, slot))
            .collect();

        debug!(panels_count = panels.len(); "Panel layout computed");
        panels
    }

    /// Iterates over the cards of `spec` in column-major order.
    ///
    /// Card ids are assigned row-major over the card grid, so the visiting
    /// order and the id order differ whenever there is more than one card row.
    pub fn cards(&self, spec: &GridSpec) -> impl Iterator<Item = Card> {
        let spec = *spec;
        let spacing = self.spacing;
        (0..spec.cards_wide()).flat_map(move |card_x| {
            (0..spec.cards_high()).map(move |card_y| Self::card_at(spacing, &spec, card_x, card_y))
        })
    }

    fn card_at(spacing: Spacing, spec: &GridSpec, card_x: u32, card_y: u32) -> Card {
        let kind = spec.kind();
        let id = card_y * spec.cards_wide() + card_x + 1;
        let origin = Point::new(
            spacing.origin_x + u64::from(card_x) * spacing.card_pitch_x(kind),
            spacing.origin_y + u64::from(card_y) * spacing.card_pitch_y(kind),
        );

        let card = Card::new(id, Cell::new(card_y, card_x), origin);
        trace!(card_id = id, card_x, card_y, color:% = card.color(); "Placed card");
        card
    }

    /// Yields the in-grid panels of `card`, row-major.
    fn panel_slots(&self, spec: &GridSpec, card: Card) -> impl Iterator<Item = PanelSlot> {
        let spec = *spec;
        let spacing = self.spacing;
        let kind = spec.kind();

        (0..kind.card_rows())
            .flat_map(move |row| (0..kind.card_cols()).map(move |col| Cell::new(row, col)))
            .filter_map(move |local| {
                let global = Cell::new(
                    card.grid().row() * kind.card_rows() + local.row(),
                    card.grid().col() * kind.card_cols() + local.col(),
                );
                if global.col() >= spec.width() || global.row() >= spec.height() {
                    return None;
                }

                let label = PanelLabel::for_position(kind, card.id(), local.row(), local.col());
                let position = card.origin().offset(
                    u64::from(local.col()) * spacing.pitch_x,
                    u64::from(local.row()) * spacing.pitch_y,
                );
                Some(PanelSlot::new(
                    &card,
                    label,
                    local,
                    global,
                    position,
                    spacing.panel_size(),
                ))
            })
    }
}
