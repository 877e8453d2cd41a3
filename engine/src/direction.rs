//! Directions and Turn Glyphs
//!
//! The pipe only ever moves along the four cardinal directions. Their integer
//! values are fixed so that `(d + 1) % 4` is a right turn and `(d + 3) % 4` a
//! left turn, matching the order East, South, West, North.

use serde::{Deserialize, Serialize};

/// One of the four cardinal directions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +x
    #[default]
    East = 0,
    /// +y (terminal rows grow downward)
    South = 1,
    /// -x
    West = 2,
    /// -y
    North = 3,
}

impl Direction {
    /// All directions in turn order
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Direction for an integer, taken mod 4
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Self::East,
            1 => Self::South,
            2 => Self::West,
            _ => Self::North,
        }
    }

    /// Integer value in `0..4`
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Clockwise neighbour, `(d + 1) % 4`
    #[must_use]
    pub const fn turn_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Counter-clockwise neighbour, `(d + 3) % 4`
    #[must_use]
    pub const fn turn_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Unit step `(dx, dy)` for this direction
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
            Self::North => (0, -1),
        }
    }
}

/// The glyph drawn for a cell, given how the pipe entered and left it
///
/// Corner names describe which two sides of the cell the pipe joins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// `═`
    Horizontal,
    /// `║`
    Vertical,
    /// `╗` joins left and bottom
    DownLeft,
    /// `╝` joins left and top
    UpLeft,
    /// `╚` joins right and top
    UpRight,
    /// `╔` joins right and bottom
    DownRight,
    /// No meaningful transition (a reversal, or nothing drawn yet)
    Placeholder,
}

impl Glyph {
    /// Map a `(from, to)` direction pair to the glyph that connects them
    ///
    /// Total over all 16 pairs. Reversals fall back to [`Glyph::Placeholder`].
    #[must_use]
    pub const fn for_turn(from: Direction, to: Direction) -> Self {
        use Direction::*;

        match (from, to) {
            (East, East) | (West, West) => Self::Horizontal,
            (South, South) | (North, North) => Self::Vertical,
            (East, South) | (North, West) => Self::DownLeft,
            (East, North) | (South, West) => Self::UpLeft,
            (West, North) | (South, East) => Self::UpRight,
            (West, South) | (North, East) => Self::DownRight,
            _ => Self::Placeholder,
        }
    }

    /// Display character, with `placeholder` standing in for [`Glyph::Placeholder`]
    #[must_use]
    pub const fn symbol_or(self, placeholder: char) -> char {
        match self {
            Self::Horizontal => '═',
            Self::Vertical => '║',
            Self::DownLeft => '╗',
            Self::UpLeft => '╝',
            Self::UpRight => '╚',
            Self::DownRight => '╔',
            Self::Placeholder => placeholder,
        }
    }

    /// Whether this is one of the four corner pieces
    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::DownLeft | Self::UpLeft | Self::UpRight | Self::DownRight
        )
    }
}
