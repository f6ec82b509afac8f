//! Geometric primitives for placing panels on the diagram canvas.
//!
//! Panelgrid works in whole pixels with the diagram tool's coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - [`Point`] - A pixel position (top-left corner of a panel)
//! - [`Size`] - Width and height of a panel in pixels

/// A pixel position in diagram space.
///
/// # Examples
///
/// ```
/// # use panelgrid_core::geometry::Point;
/// let origin = Point::new(100, 100);
/// let moved = origin.offset(85, 45);
/// assert_eq!(moved, Point::new(185, 145));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: u64,
    y: u64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> u64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> u64 {
        self.y
    }

    /// Returns a new point moved right by `dx` and down by `dy`.
    pub fn offset(self, dx: u64, dy: u64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    width: u64,
    height: u64,
}

impl Size {
    /// Creates a new size
    pub fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> u64 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> u64 {
        self.height
    }
}
