//! Grid Surfaces
//!
//! A surface is the rendering target the controller writes committed pipe
//! cells into. Two strategies exist:
//!
//! - [`DenseGrid`]: a row-major character matrix, rendered in full each frame.
//! - [`SparseCanvas`]: a coordinate map of colored cells, rendered as one
//!   positioned escape sequence for the most recent write. Earlier cells are
//!   expected to still be on the terminal from previous frames.

mod dense;
mod sparse;

pub use dense::DenseGrid;
pub use sparse::{CellRecord, SparseCanvas};

use crate::color::Rgb;

/// A grid coordinate
///
/// Signed so that writes just outside the grid can be expressed (and ignored).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Drawable area in cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bounds {
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Center cell, rounded toward the origin
    #[must_use]
    pub const fn center(self) -> Coord {
        Coord::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    /// Whether the coordinate lies on the grid
    #[must_use]
    pub const fn contains(self, at: Coord) -> bool {
        at.x >= 0 && at.y >= 0 && at.x < self.width as i32 && at.y < self.height as i32
    }

    /// True when either side is zero
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Shrink each side by `by`, saturating at zero
    #[must_use]
    pub const fn shrink(self, by: u16) -> Self {
        Self::new(self.width.saturating_sub(by), self.height.saturating_sub(by))
    }
}

/// A committed cell on its way into a surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub at: Coord,
    pub glyph: char,
    /// Foreground color, for surfaces that support one
    pub color: Option<Rgb>,
}

/// Rendering target for committed pipe cells
pub trait GridSurface: Send {
    /// Drop all content and resize to `bounds`
    ///
    /// Returns output the host must write once before the next frame, if any.
    fn reset(&mut self, bounds: Bounds) -> Option<String>;

    /// Write one cell
    fn set(&mut self, cell: Cell);

    /// Produce the frame string for the current state
    fn render(&self) -> String;

    /// Whether the surface can accept and display cells
    fn is_ready(&self) -> bool;
}
