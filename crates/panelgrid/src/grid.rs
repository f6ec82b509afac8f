//! Validated grid requests.
//!
//! [`GridSpec`] is the only way into the layout engine. Constructing one
//! checks the raw user input, so everything downstream works on a grid that
//! is known to be non-empty and small enough to number.

use panelgrid_core::template::LayoutKind;

use crate::{config::OutputConfig, error::PanelGridError};

/// Largest number of panels a single sheet may hold.
///
/// A panel cell takes roughly 280 bytes of markup, so this keeps a document
/// under about 300 MB.
pub const MAX_PANELS: u64 = 1_000_000;

/// A requested panel grid: `width` x `height` panels grouped into cards of `kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    width: u32,
    height: u32,
    kind: LayoutKind,
}

impl GridSpec {
    /// Validates raw dimensions and builds a grid request.
    ///
    /// # Errors
    ///
    /// Returns [`PanelGridError::InvalidDimensions`] if either dimension is not
    /// positive, and [`PanelGridError::GridTooLarge`] if the grid would hold
    /// more than [`MAX_PANELS`] panels.
    ///
    /// # Examples
    ///
    /// ```
    /// use panelgrid::{GridSpec, LayoutKind};
    ///
    /// let spec = GridSpec::new(4, 2, LayoutKind::TwoByThree).unwrap();
    /// assert_eq!(spec.cards_wide(), 2);
    /// assert_eq!(spec.cards_high(), 1);
    ///
    /// assert!(GridSpec::new(0, 2, LayoutKind::TwoByThree).is_err());
    /// ```
    pub fn new(width: i64, height: i64, kind: LayoutKind) -> Result<Self, PanelGridError> {
        if width <= 0 || height <= 0 {
            return Err(PanelGridError::InvalidDimensions { width, height });
        }

        let too_large = || PanelGridError::GridTooLarge { width, height };
        let w = u32::try_from(width).map_err(|_| too_large())?;
        let h = u32::try_from(height).map_err(|_| too_large())?;

        if u64::from(w) * u64::from(h) > MAX_PANELS {
            return Err(too_large());
        }

        Ok(Self {
            width: w,
            height: h,
            kind,
        })
    }

    /// Number of panel columns requested
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of panel rows requested
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Card template used for every card
    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    /// Cards needed to cover the width, rounding up.
    pub fn cards_wide(&self) -> u32 {
        self.width.div_ceil(self.kind.card_cols())
    }

    /// Cards needed to cover the height, rounding up.
    pub fn cards_high(&self) -> u32 {
        self.height.div_ceil(self.kind.card_rows())
    }

    /// Total number of panels that will be emitted.
    pub fn panel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Conventional file name for the generated document,
    /// `"{panel_count} {descriptor}.{extension}"`.
    pub fn file_name(&self, output: &OutputConfig) -> String {
        format!(
            "{} {}.{}",
            self.panel_count(),
            output.descriptor(),
            output.extension()
        )
    }
}
