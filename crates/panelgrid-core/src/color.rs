//! Color handling for Panelgrid diagrams
//!
//! This module provides two color types:
//!
//! - [`Color`] wraps the `DynamicColor` type from the color crate and is used
//!   to validate CSS color strings coming from configuration.
//! - [`CardColor`] is the deterministic pastel fill assigned to every card,
//!   derived from the card id by successive golden-angle hue steps.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Hue step between consecutive card ids, in degrees.
pub const GOLDEN_ANGLE: f64 = 137.508;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "hsl(120, 60%, 85%)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelgrid_core::color::Color;
    ///
    /// let black = Color::new("#000000").unwrap();
    /// let pastel = Color::new("hsl(137.508, 60%, 85%)").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

/// The fill color of a card.
///
/// The hue is `(id * 137.508) mod 360`; saturation and lightness are fixed at
/// 60% and 85%. The [`Display`](fmt::Display) form is the CSS string written
/// into diagram styles, e.g. `hsl(137.508, 60%, 85%)`.
///
/// # Examples
///
/// ```
/// use panelgrid_core::color::CardColor;
///
/// assert_eq!(CardColor::for_card(1).to_string(), "hsl(137.508, 60%, 85%)");
/// assert_eq!(CardColor::for_card(7), CardColor::for_card(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardColor {
    hue: f64,
}

impl CardColor {
    /// Saturation percentage shared by every card color.
    pub const SATURATION: u8 = 60;

    /// Lightness percentage shared by every card color.
    pub const LIGHTNESS: u8 = 85;

    /// Returns the color of the card with the given id.
    pub fn for_card(card_id: u32) -> Self {
        Self {
            hue: (f64::from(card_id) * GOLDEN_ANGLE) % 360.0,
        }
    }

    /// Returns the hue in degrees, in the range `[0, 360)`.
    pub fn hue(self) -> f64 {
        self.hue
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue,
            Self::SATURATION,
            Self::LIGHTNESS
        )
    }
}
