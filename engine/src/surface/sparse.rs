//! Sparse colored canvas
//!
//! Stores every painted cell by coordinate but only ever emits the most recent
//! one. This relies on the terminal keeping what was drawn in earlier frames,
//! so it only works on an output that is never cleared between frames.

use std::collections::HashMap;

use super::{Bounds, Cell, Coord, GridSurface};
use crate::color::Rgb;

/// A painted cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRecord {
    pub at: Coord,
    pub glyph: char,
    pub color: Rgb,
}

impl CellRecord {
    /// Cursor-positioned, 24-bit colored escape sequence for this cell
    ///
    /// Terminal rows and columns are 1-indexed, grid coordinates are not.
    #[must_use]
    pub fn escape_sequence(&self) -> String {
        format!(
            "\x1b[{};{}H\x1b[38;2;{};{};{}m{}\x1b[0m",
            self.at.y + 1,
            self.at.x + 1,
            self.color.r,
            self.color.g,
            self.color.b,
            self.glyph
        )
    }
}

/// Coordinate map of colored cells with incremental output
#[derive(Clone, Debug, Default)]
pub struct SparseCanvas {
    cells: HashMap<Coord, CellRecord>,
    last: Option<Coord>,
    bounds: Bounds,
}

impl SparseCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every cell and adopt new bounds
    ///
    /// Returns one line break per row, which scrolls the terminal to a fresh
    /// drawing area when written before the first frame.
    pub fn reset(&mut self, bounds: Bounds) -> String {
        self.cells.clear();
        self.last = None;
        self.bounds = bounds;
        "\n".repeat(bounds.height as usize)
    }

    /// Insert or overwrite the cell at `(x, y)`
    pub fn set(&mut self, x: i32, y: i32, glyph: char, color: Rgb) {
        let at = Coord::new(x, y);
        self.cells.insert(at, CellRecord { at, glyph, color });
        self.last = Some(at);
    }

    #[must_use]
    pub fn get(&self, at: Coord) -> Option<&CellRecord> {
        self.cells.get(&at)
    }

    /// The most recently written cell
    #[must_use]
    pub fn last(&self) -> Option<&CellRecord> {
        self.last.and_then(|at| self.cells.get(&at))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Escape sequence for the last written cell, empty before any write
    #[must_use]
    pub fn render(&self) -> String {
        self.last()
            .map(CellRecord::escape_sequence)
            .unwrap_or_default()
    }
}

impl GridSurface for SparseCanvas {
    fn reset(&mut self, bounds: Bounds) -> Option<String> {
        Some(SparseCanvas::reset(self, bounds))
    }

    fn set(&mut self, cell: Cell) {
        let color = cell.color.unwrap_or(Rgb::WHITE);
        SparseCanvas::set(self, cell.at.x, cell.at.y, cell.glyph, color);
    }

    fn render(&self) -> String {
        SparseCanvas::render(self)
    }

    fn is_ready(&self) -> bool {
        !self.bounds.is_empty()
    }
}
