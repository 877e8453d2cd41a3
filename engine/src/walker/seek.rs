//! Target-seeking walker
//!
//! Picks a random point in the grid interior and walks to it, fixing x first
//! and then y, so the pipe is drawn as straight runs joined by corners. On
//! arrival it picks the next target.

use rand::{Rng, RngCore};

use super::{PathWalker, Stroke};
use crate::direction::{Direction, Glyph};
use crate::surface::{Bounds, Coord};

/// Distance kept between targets and the grid edges
pub const TARGET_INSET: i32 = 2;

/// Smallest side length that leaves at least two interior rows and columns
pub const MIN_SEEK_SIDE: u16 = 6;

/// Placeholder drawn when no turn glyph applies
const PLACEHOLDER: char = ' ';

/// Walker that heads for randomly chosen targets with an immediate commit
#[derive(Clone, Debug, Default)]
pub struct Seeker {
    position: Coord,
    previous: Coord,
    target: Coord,
    last_dir: Direction,
    bounds: Bounds,
}

impl Seeker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at `start` with an explicit target
    #[must_use]
    pub fn starting_at(bounds: Bounds, start: Coord, target: Coord, dir: Direction) -> Self {
        Self {
            position: start,
            previous: start,
            target,
            last_dir: dir,
            bounds,
        }
    }

    /// Draw a fresh interior target sharing neither row nor column with the head
    ///
    /// Terminates with probability 1 as long as the interior is at least two
    /// cells wide and tall, which [`PathWalker::accepts`] guarantees.
    pub fn retarget<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let max_x = i32::from(self.bounds.width) - TARGET_INSET;
        let max_y = i32::from(self.bounds.height) - TARGET_INSET;

        let mut candidate = self.position;
        while candidate.x == self.position.x || candidate.y == self.position.y {
            candidate = Coord::new(
                rng.gen_range(TARGET_INSET..max_x),
                rng.gen_range(TARGET_INSET..max_y),
            );
        }

        tracing::trace!(x = candidate.x, y = candidate.y, "new pipe target");
        self.target = candidate;
    }

    /// Next heading toward the target, horizontal first
    #[must_use]
    pub fn heading(&self) -> Option<Direction> {
        let (pos, target) = (self.position, self.target);
        if pos.x < target.x {
            Some(Direction::East)
        } else if pos.x > target.x {
            Some(Direction::West)
        } else if pos.y < target.y {
            Some(Direction::South)
        } else if pos.y > target.y {
            Some(Direction::North)
        } else {
            None
        }
    }

    /// Move one cell toward the target and commit the cell just left
    ///
    /// At the target this stays put and commits a placeholder.
    pub fn advance(&mut self) -> Stroke {
        self.previous = self.position;

        let glyph = match self.heading() {
            Some(dir) => {
                let (dx, dy) = dir.delta();
                self.position = Coord::new(self.position.x + dx, self.position.y + dy);
                let glyph = Glyph::for_turn(self.last_dir, dir);
                self.last_dir = dir;
                glyph
            }
            None => Glyph::Placeholder,
        };

        Stroke {
            at: self.previous,
            glyph: glyph.symbol_or(PLACEHOLDER),
        }
    }

    #[must_use]
    pub fn target(&self) -> Coord {
        self.target
    }

    #[must_use]
    pub fn previous(&self) -> Coord {
        self.previous
    }

    #[must_use]
    pub fn last_direction(&self) -> Direction {
        self.last_dir
    }
}

impl PathWalker for Seeker {
    fn reset(&mut self, bounds: Bounds) {
        let center = bounds.center();
        self.bounds = bounds;
        self.position = center;
        self.previous = center;
        // Target on the head forces a retarget on the first step
        self.target = center;
    }

    fn accepts(&self, bounds: Bounds) -> bool {
        bounds.width >= MIN_SEEK_SIDE && bounds.height >= MIN_SEEK_SIDE
    }

    fn step(&mut self, rng: &mut dyn RngCore) -> Option<Stroke> {
        if !self.accepts(self.bounds) {
            return None;
        }
        if self.position == self.target {
            self.retarget(rng);
        }
        Some(self.advance())
    }

    fn position(&self) -> Coord {
        self.position
    }
}
