//! Ship shapes and hit accounting.
//!
//! Every ship is a straight line of cells. A ship is identified by its origin
//! cell, its length, and the direction it extends in, and it tracks how many of
//! its cells have not been hit yet.

use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::Coordinate;

/// Direction a ship extends in from its origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// The ship extends along the `x` axis.
    Horizontal,
    /// The ship extends along the `y` axis.
    Vertical,
}

impl Distribution<Orientation> for Standard {
    /// Picks one of the two orientations with equal probability.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.gen() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A single ship: a straight line of cells plus a count of not-yet-hit cells.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ship {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    /// Create a ship extending from `origin` in the given direction. Panics if
    /// `length` is 0.
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        assert!(length > 0, "ship length must be at least 1");
        Self {
            origin,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    /// Cell the ship extends from.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Number of cells the ship covers.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Direction the ship extends in.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells of this ship that have not been hit yet.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    /// True once every cell of the ship has been hit.
    pub fn sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    /// Iterator over the cells the ship covers, starting from the origin.
    ///
    /// The cells are derived from the origin, length, and orientation alone, so
    /// repeated calls always yield the same sequence.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length).map(move |offset| match self.orientation {
            Orientation::Horizontal => Coordinate::new(self.origin.x + offset, self.origin.y),
            Orientation::Vertical => Coordinate::new(self.origin.x, self.origin.y + offset),
        })
    }

    /// True if the ship covers the given cell.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.cells().any(|cell| cell == coord)
    }

    /// Record a hit on one of this ship's cells. The caller must already have
    /// checked that the cell belongs to this ship and was not hit before.
    pub(crate) fn record_hit(&mut self) {
        debug_assert!(self.remaining_hits > 0, "ship hit after sinking");
        self.remaining_hits -= 1;
    }
}
