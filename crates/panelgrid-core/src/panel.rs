//! Cards, panels, and panel labels.
//!
//! A [`Card`] groups the panels of one template instance and owns their
//! shared color. A [`Panel`] is one labeled rectangle of the final diagram.
//! Panels are produced in two steps: the layout first yields a [`PanelSlot`]
//! for every in-grid position, then pairs each slot with its identifier.

use std::fmt;

use crate::{
    color::CardColor,
    geometry::{Point, Size},
    template::LayoutKind,
};

/// Identifier of the first panel cell in a document.
///
/// Identifiers `0` and `1` belong to the document's root and default layer.
pub const FIRST_PANEL_ID: u32 = 2;

/// A `(row, col)` position in a panel grid, zero-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: u32,
    col: u32,
}

impl Cell {
    /// Creates a new cell position
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Returns the row index
    pub fn row(self) -> u32 {
        self.row
    }

    /// Returns the column index
    pub fn col(self) -> u32 {
        self.col
    }
}

/// The text shown on a panel: `"{card_id}.{index}"`.
///
/// `index` runs from 1 to the number of panels in a card. How it maps to the
/// panel's local position depends on the [`LayoutKind`]; see
/// [`PanelLabel::for_position`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelLabel {
    card_id: u32,
    index: u32,
}

impl PanelLabel {
    /// Creates a label from its parts.
    pub fn new(card_id: u32, index: u32) -> Self {
        Self { card_id, index }
    }

    /// Computes the label of the panel at local `(row, col)` inside card `card_id`.
    ///
    /// - [`LayoutKind::TwoByThree`]: the top row carries the odd indices and the
    ///   bottom row the even ones, both left to right.
    /// - [`LayoutKind::ThreeByTwo`]: indices run down each column, so column 0
    ///   holds `1..=3` and column 1 holds `4..=6`.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelgrid_core::{panel::PanelLabel, template::LayoutKind};
    ///
    /// let top_right = PanelLabel::for_position(LayoutKind::TwoByThree, 4, 0, 2);
    /// assert_eq!(top_right.to_string(), "4.5");
    ///
    /// let bottom_left = PanelLabel::for_position(LayoutKind::ThreeByTwo, 4, 2, 0);
    /// assert_eq!(bottom_left.to_string(), "4.3");
    /// ```
    pub fn for_position(kind: LayoutKind, card_id: u32, row: u32, col: u32) -> Self {
        let index = match kind {
            LayoutKind::TwoByThree if row == 0 => 2 * col + 1,
            LayoutKind::TwoByThree => 2 * col + 2,
            LayoutKind::ThreeByTwo => row + 1 + col * kind.card_rows(),
        };
        Self { card_id, index }
    }

    /// Returns the owning card's id
    pub fn card_id(self) -> u32 {
        self.card_id
    }

    /// Returns the panel's index within its card
    pub fn index(self) -> u32 {
        self.index
    }
}

impl fmt::Display for PanelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.card_id, self.index)
    }
}

/// One card of the card grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Card {
    id: u32,
    grid: Cell,
    origin: Point,
    color: CardColor,
}

impl Card {
    /// Creates a card at card-grid position `grid` whose top-left panel sits at `origin`.
    ///
    /// The color is derived from `id`.
    pub fn new(id: u32, grid: Cell, origin: Point) -> Self {
        Self {
            id,
            grid,
            origin,
            color: CardColor::for_card(id),
        }
    }

    /// Returns the 1-based card id
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the card's position in the card grid
    pub fn grid(&self) -> Cell {
        self.grid
    }

    /// Returns the pixel position of the card's top-left panel
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the card's fill color
    pub fn color(&self) -> CardColor {
        self.color
    }
}

/// A panel that falls inside the requested grid but has no identifier yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSlot {
    label: PanelLabel,
    local: Cell,
    global: Cell,
    position: Point,
    size: Size,
    color: CardColor,
}

impl PanelSlot {
    /// Creates a slot for the panel at `local` inside `card`.
    pub fn new(
        card: &Card,
        label: PanelLabel,
        local: Cell,
        global: Cell,
        position: Point,
        size: Size,
    ) -> Self {
        Self {
            label,
            local,
            global,
            position,
            size,
            color: card.color(),
        }
    }
}

/// A placed, labeled, identified panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    id: u32,
    slot: PanelSlot,
}

impl Panel {
    /// Assigns `id` to `slot`.
    pub fn new(id: u32, slot: PanelSlot) -> Self {
        Self { id, slot }
    }

    /// Returns the document-wide panel identifier
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the id of the card this panel belongs to
    pub fn card_id(&self) -> u32 {
        self.slot.label.card_id()
    }

    /// Returns the panel label
    pub fn label(&self) -> PanelLabel {
        self.slot.label
    }

    /// Returns the position inside the owning card
    pub fn local(&self) -> Cell {
        self.slot.local
    }

    /// Returns the position inside the overall requested grid
    pub fn global(&self) -> Cell {
        self.slot.global
    }

    /// Returns the pixel position of the panel's top-left corner
    pub fn position(&self) -> Point {
        self.slot.position
    }

    /// Returns the pixel size of the panel
    pub fn size(&self) -> Size {
        self.slot.size
    }

    /// Returns the fill color inherited from the owning card
    pub fn color(&self) -> CardColor {
        self.slot.color
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;

    fn labels_for(kind: LayoutKind, card_id: u32) -> Vec<Vec<String>> {
        (0..kind.card_rows())
            .map(|row| {
                (0..kind.card_cols())
                    .map(|col| PanelLabel::for_position(kind, card_id, row, col).to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_two_by_three_odd_top_even_bottom() {
        let labels = labels_for(LayoutKind::TwoByThree, 1);
        assert_eq!(labels[0], ["1.1", "1.3", "1.5"]);
        assert_eq!(labels[1], ["1.2", "1.4", "1.6"]);
    }

    #[test]
    fn test_three_by_two_numbered_by_column() {
        let labels = labels_for(LayoutKind::ThreeByTwo, 1);
        assert_eq!(labels[0], ["1.1", "1.4"]);
        assert_eq!(labels[1], ["1.2", "1.5"]);
        assert_eq!(labels[2], ["1.3", "1.6"]);
    }

    #[test]
    fn test_label_display_uses_card_id() {
        assert_eq!(PanelLabel::new(12, 6).to_string(), "12.6");
        let label = PanelLabel::for_position(LayoutKind::ThreeByTwo, 7, 0, 1);
        assert_eq!(label.card_id(), 7);
        assert_eq!(label.index(), 4);
    }

    #[test]
    fn test_card_color_follows_id() {
        let card = Card::new(5, Cell::new(1, 0), Point::new(100, 380));
        assert_eq!(card.color(), CardColor::for_card(5));
        assert_eq!(card.origin(), Point::new(100, 380));
    }

    #[test]
    fn test_panel_inherits_card_fields() {
        let card = Card::new(3, Cell::new(0, 2), Point::new(620, 100));
        let label = PanelLabel::for_position(LayoutKind::TwoByThree, 3, 1, 0);
        let slot = PanelSlot::new(
            &card,
            label,
            Cell::new(1, 0),
            Cell::new(1, 6),
            Point::new(620, 145),
            Size::new(80, 40),
        );
        let panel = Panel::new(FIRST_PANEL_ID, slot);

        assert_eq!(panel.id(), 2);
        assert_eq!(panel.card_id(), 3);
        assert_eq!(panel.label().to_string(), "3.2");
        assert_eq!(panel.color(), card.color());
        assert_eq!(panel.global(), Cell::new(1, 6));
    }

    proptest! {
        #[test]
        fn prop_labels_cover_card_exactly_once(card_id in 1u32..10_000, two_by_three in any::<bool>()) {
            let kind = if two_by_three { LayoutKind::TwoByThree } else { LayoutKind::ThreeByTwo };
            let indices: HashSet<u32> = (0..kind.card_rows())
                .flat_map(|row| (0..kind.card_cols()).map(move |col| (row, col)))
                .map(|(row, col)| PanelLabel::for_position(kind, card_id, row, col).index())
                .collect();
            let expected: HashSet<u32> = (1..=kind.panels_per_card()).collect();
            prop_assert_eq!(indices, expected);
        }
    }
}
