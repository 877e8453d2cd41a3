//! Dense character grid
//!
//! Flat row-major buffer of `width * height` glyphs. The whole buffer is
//! rendered every frame, rows separated by line breaks.

use super::{Bounds, Cell, GridSurface};

/// Blank cell content
const BLANK: char = ' ';

/// Row-major glyph matrix
#[derive(Clone, Debug, Default)]
pub struct DenseGrid {
    cells: Vec<char>,
    stride: usize,
}

impl DenseGrid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a blank `width * height` buffer
    ///
    /// A zero width leaves the grid untouched (and not ready if it never was).
    pub fn init(&mut self, width: u16, height: u16) {
        if width == 0 {
            return;
        }
        self.stride = width as usize;
        self.cells = vec![BLANK; width as usize * height as usize];
    }

    /// Blank every cell
    pub fn wipe(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Write a glyph, ignoring coordinates off the grid
    pub fn set(&mut self, x: i32, y: i32, glyph: char) {
        if x < 0 || y < 0 || x as usize >= self.width() || y as usize >= self.height() {
            return;
        }
        let idx = y as usize * self.stride + x as usize;
        if let Some(cell) = self.cells.get_mut(idx) {
            *cell = glyph;
        }
    }

    /// Glyph at a coordinate, `None` off the grid
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        if x < 0 || y < 0 || x as usize >= self.width() {
            return None;
        }
        self.cells.get(y as usize * self.stride + x as usize).copied()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.stride
    }

    #[must_use]
    pub fn height(&self) -> usize {
        if self.stride == 0 {
            return 0;
        }
        self.cells.len().div_ceil(self.stride)
    }

    /// True once a non-empty buffer has been allocated
    #[must_use]
    pub fn is_ready(&self) -> bool {
        !self.cells.is_empty()
    }

    /// All rows joined with line breaks, no trailing newline
    #[must_use]
    pub fn render(&self) -> String {
        if self.stride == 0 {
            return String::new();
        }
        let mut out = String::with_capacity(self.cells.len() * 3 + self.height());
        for (i, row) in self.cells.chunks(self.stride).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }
}

impl GridSurface for DenseGrid {
    fn reset(&mut self, bounds: Bounds) -> Option<String> {
        self.init(bounds.width, bounds.height);
        None
    }

    fn set(&mut self, cell: Cell) {
        DenseGrid::set(self, cell.at.x, cell.at.y, cell.glyph);
    }

    fn render(&self) -> String {
        DenseGrid::render(self)
    }

    fn is_ready(&self) -> bool {
        DenseGrid::is_ready(self)
    }
}
