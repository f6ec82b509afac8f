//! Card templates.
//!
//! A card is a fixed cluster of panels. [`LayoutKind`] selects its shape and,
//! with it, the numbering convention used for panel labels.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Panel arrangement within a single card.
///
/// The names match the external tags `"2x3"` and `"3x2"` (rows x columns).
///
/// # Variants
///
/// - `TwoByThree` - 2 rows by 3 columns, odd labels on top, even labels below
/// - `ThreeByTwo` - 3 rows by 2 columns, labels numbered down each column (default)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LayoutKind {
    /// Two rows of three panels.
    #[serde(rename = "2x3")]
    TwoByThree,
    /// Three rows of two panels.
    #[default]
    #[serde(rename = "3x2")]
    ThreeByTwo,
}

impl LayoutKind {
    /// Number of panel rows in one card.
    pub fn card_rows(self) -> u32 {
        match self {
            Self::TwoByThree => 2,
            Self::ThreeByTwo => 3,
        }
    }

    /// Number of panel columns in one card.
    pub fn card_cols(self) -> u32 {
        match self {
            Self::TwoByThree => 3,
            Self::ThreeByTwo => 2,
        }
    }

    /// Number of panels in a fully populated card.
    pub fn panels_per_card(self) -> u32 {
        self.card_rows() * self.card_cols()
    }
}

/// Error returned when a layout tag is neither `"2x3"` nor `"3x2"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported card layout `{tag}`, expected `2x3` or `3x2`")]
pub struct ParseLayoutKindError {
    tag: String,
}

impl ParseLayoutKindError {
    /// The rejected tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl FromStr for LayoutKind {
    type Err = ParseLayoutKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2x3" => Ok(Self::TwoByThree),
            "3x2" => Ok(Self::ThreeByTwo),
            _ => Err(ParseLayoutKindError { tag: s.to_string() }),
        }
    }
}

impl From<LayoutKind> for &'static str {
    fn from(val: LayoutKind) -> Self {
        match val {
            LayoutKind::TwoByThree => "2x3",
            LayoutKind::ThreeByTwo => "3x2",
        }
    }
}

impl Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
