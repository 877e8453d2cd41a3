//! Free-wandering walker
//!
//! Keeps heading the same way most of the time and occasionally turns a
//! quarter left or right. Leaving one edge of the grid re-enters at the
//! opposite edge.

use std::collections::VecDeque;

use rand::{Rng, RngCore};

use super::{PathWalker, Stroke};
use crate::direction::{Direction, Glyph};
use crate::surface::{Bounds, Coord};

/// Number of recent positions kept
pub const TAIL_LENGTH: usize = 10;

/// Sides of the die rolled each tick to decide whether to turn
pub const TURN_DIE_SIDES: u32 = 10;

/// A roll strictly above this turns (so only a 9 does)
pub const TURN_THRESHOLD: u32 = 8;

/// Placeholder drawn when no turn glyph applies
const PLACEHOLDER: char = '.';

/// Pick the next heading from the last one
///
/// Two sequential draws: a roll in `[0, 10)`; if it exceeds 8, a coin in
/// `[0, 2)` where 0 turns right and 1 turns left.
pub fn choose_direction<R: Rng + ?Sized>(last: Direction, rng: &mut R) -> Direction {
    if rng.gen_range(0..TURN_DIE_SIDES) > TURN_THRESHOLD {
        if rng.gen_range(0..2u32) == 0 {
            last.turn_right()
        } else {
            last.turn_left()
        }
    } else {
        last
    }
}

/// Wrap-around random walker with a delayed commit
#[derive(Clone, Debug)]
pub struct Wanderer {
    tail: VecDeque<Coord>,
    last_dir: Direction,
    glyph: Glyph,
    bounds: Bounds,
}

impl Wanderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tail: VecDeque::from([Coord::default()]),
            last_dir: Direction::East,
            glyph: Glyph::Placeholder,
            bounds: Bounds::default(),
        }
    }

    /// Start a walker at `start`, heading `dir`
    #[must_use]
    pub fn starting_at(bounds: Bounds, start: Coord, dir: Direction) -> Self {
        Self {
            tail: VecDeque::from([start]),
            last_dir: dir,
            glyph: Glyph::Placeholder,
            bounds,
        }
    }

    /// Move one cell in `dir`, updating the glyph and tail
    pub fn advance(&mut self, dir: Direction) {
        let head = self.head();
        let (dx, dy) = dir.delta();

        self.glyph = Glyph::for_turn(self.last_dir, dir);
        self.last_dir = dir;

        let width = i32::from(self.bounds.width.max(1));
        let height = i32::from(self.bounds.height.max(1));
        let next = Coord::new(
            (head.x + dx).rem_euclid(width),
            (head.y + dy).rem_euclid(height),
        );

        self.tail.push_back(next);
        if self.tail.len() > TAIL_LENGTH {
            self.tail.pop_front();
        }
    }

    /// The cell due for drawing: second-to-last in the tail
    ///
    /// Nothing is due until the tail holds more than two positions.
    #[must_use]
    pub fn committed(&self) -> Option<Stroke> {
        if self.tail.len() <= 2 {
            return None;
        }
        let at = self.tail[self.tail.len() - 2];
        Some(Stroke {
            at,
            glyph: self.glyph.symbol_or(PLACEHOLDER),
        })
    }

    #[must_use]
    pub fn head(&self) -> Coord {
        self.tail.back().copied().unwrap_or_default()
    }

    #[must_use]
    pub fn tail(&self) -> &VecDeque<Coord> {
        &self.tail
    }

    #[must_use]
    pub fn last_direction(&self) -> Direction {
        self.last_dir
    }

    #[must_use]
    pub fn glyph(&self) -> Glyph {
        self.glyph
    }
}

impl Default for Wanderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PathWalker for Wanderer {
    fn reset(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.tail.clear();
        self.tail.push_back(bounds.center());
        self.glyph = Glyph::Placeholder;
    }

    fn step(&mut self, rng: &mut dyn RngCore) -> Option<Stroke> {
        if self.bounds.is_empty() {
            return None;
        }
        let dir = choose_direction(self.last_dir, rng);
        self.advance(dir);
        self.committed()
    }

    fn position(&self) -> Coord {
        self.head()
    }
}
