//! Types that make up the game board.

use std::collections::HashSet;

use log::debug;

use crate::ships::Ship;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    errors::{CannotPlaceReason, CannotShootReason, GenerateError, PlaceError, ShotError},
    generator::BoardGenerator,
    grid::CellState,
    setup::BoardSetup,
};

mod coordinate;
mod errors;
mod generator;
mod grid;
mod setup;

/// Result of a shot on a single player's board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShotOutcome {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit a ship without sinking it.
    Hit,
    /// The shot hit a ship's last intact cell and sank it.
    Destroyed,
}

/// Represents a single player's board, including their ships and their side of
/// the ocean.
///
/// Produced by [`BoardSetup::start`] once every ship is placed, or by
/// [`BoardGenerator::generate`].
#[derive(Debug)]
pub struct Board {
    /// Grid of cells, in the state a renderer would show them.
    grid: Grid,

    /// The player's ships.
    ships: Vec<Ship>,

    /// Every cell a shot has been fired at so far.
    shots: HashSet<Coordinate>,

    /// Number of ships destroyed so far.
    destroyed: usize,

    /// Whether intact ships should be visible when rendering this board.
    revealed: bool,
}

impl Board {
    /// Edge length of this board.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Whether intact ships should be visible when rendering this board.
    ///
    /// Presentation only. Shot resolution ignores it.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Set whether intact ships should be visible when rendering this board.
    pub fn set_revealed(&mut self, revealed: bool) {
        self.revealed = revealed;
    }

    /// The player's ships.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships destroyed so far.
    pub fn destroyed_ships(&self) -> usize {
        self.destroyed
    }

    /// Returns true if all of this player's ships have been destroyed.
    ///
    /// A board that never had any ships counts as defeated.
    pub fn defeated(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    /// Get the state of the cell at the given coordinate. Returns None if the
    /// coordinate is out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.get(coord).copied()
    }

    /// Iterate over the rows of the board from `y = 0` upward. Each row yields
    /// its cells from `x = 0` upward.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = CellState> + '_> + '_ {
        let grid = &self.grid;
        (0..grid.size()).map(move |y| (0..grid.size()).map(move |x| grid[Coordinate::new(x, y)]))
    }

    /// Fire a shot at this player, returning a result indicating why the shot
    /// was aborted or the outcome of the shot on this player.
    ///
    /// Every in-bounds cell may be shot exactly once over the life of the
    /// board, whatever its current state. When a shot destroys a ship, the
    /// unshot cells around the wreck are marked [`CellState::Blocked`] for
    /// rendering, but they remain legal targets and resolve as misses.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, ShotError> {
        if !self.grid.in_bounds(coord) {
            return Err(ShotError::new(CannotShootReason::OutOfBounds, coord));
        }
        // Inserting returns false if the cell was shot before.
        if !self.shots.insert(coord) {
            return Err(ShotError::new(CannotShootReason::AlreadyShot, coord));
        }
        let hit = self.ships.iter().position(|ship| ship.occupies(coord));
        let outcome = match hit {
            None => {
                self.grid[coord] = CellState::Miss;
                ShotOutcome::Miss
            }
            Some(index) => {
                self.grid[coord] = CellState::Hit;
                self.ships[index].record_hit();
                if self.ships[index].sunk() {
                    self.destroyed += 1;
                    self.block_around(index);
                    ShotOutcome::Destroyed
                } else {
                    ShotOutcome::Hit
                }
            }
        };
        debug!("shot at {:?}: {:?}", coord, outcome);
        Ok(outcome)
    }

    /// Mark the unshot cells bordering a destroyed ship.
    ///
    /// The marker is presentation only: marked cells are not recorded as
    /// shots, so they stay legal targets.
    fn block_around(&mut self, index: usize) {
        let size = self.grid.size();
        for cell in self.ships[index].cells() {
            for neighbor in grid::neighbors(cell, size) {
                match self.grid[neighbor] {
                    CellState::Hit | CellState::Ship => {}
                    _ => self.grid[neighbor] = CellState::Blocked,
                }
            }
        }
    }
}
