//! Path Walkers
//!
//! A walker is the random-walk state machine that moves the pipe head one
//! cell per tick and decides which glyph the cell it leaves behind gets.
//!
//! Both strategies solve the same problem (only commit a glyph once the cells
//! on both sides of it are known) in different ways:
//!
//! - [`Wanderer`] buffers recent positions in a tail and commits the
//!   second-to-last one, a tick behind the head.
//! - [`Seeker`] commits the position it just left, immediately.

mod seek;
mod wander;

pub use seek::{Seeker, MIN_SEEK_SIDE, TARGET_INSET};
pub use wander::{choose_direction, Wanderer, TAIL_LENGTH, TURN_DIE_SIDES, TURN_THRESHOLD};

use rand::RngCore;

use crate::surface::{Bounds, Coord};

/// A cell a walker has finished with and wants drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    pub at: Coord,
    pub glyph: char,
}

/// Step-by-step pipe path generator
pub trait PathWalker: Send {
    /// Restart from the center of `bounds`
    fn reset(&mut self, bounds: Bounds);

    /// Whether the walker can operate inside `bounds`
    fn accepts(&self, bounds: Bounds) -> bool {
        !bounds.is_empty()
    }

    /// Advance one tick, yielding the cell to commit this tick, if any
    fn step(&mut self, rng: &mut dyn RngCore) -> Option<Stroke>;

    /// Current head position
    fn position(&self) -> Coord;
}
