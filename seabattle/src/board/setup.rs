//! Implements the setup phase of the board.
use std::collections::HashSet;

use crate::{
    board::{
        grid::{self, CellState, Grid},
        Board, CannotPlaceReason, Coordinate, PlaceError,
    },
    ships::Ship,
};

/// Setup phase for a [`Board`]. Allows placing ships and does not allow
/// shooting.
///
/// Ships may not touch: placing a ship reserves the cells it covers plus every
/// bordering cell, diagonals included, and later placements are rejected if
/// they overlap any reserved cell.
pub struct BoardSetup {
    /// Grid ships are placed into.
    grid: Grid,

    /// Cells unavailable for further placement: every placed ship cell plus
    /// the buffer zone around it. The buffer cells stay [`CellState::Empty`]
    /// on the grid; only this set knows about them.
    occupied: HashSet<Coordinate>,

    /// Ships placed so far.
    ships: Vec<Ship>,
}

impl BoardSetup {
    /// Begin setup of a square board with `size` cells along each edge.
    pub fn new(size: usize) -> Self {
        Self {
            grid: Grid::new(size),
            occupied: HashSet::new(),
            ships: Vec::new(),
        }
    }

    /// Edge length of the board under construction.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Number of ships placed so far.
    pub fn ships_placed(&self) -> usize {
        self.ships.len()
    }

    /// Attempts to place the given ship on the board.
    ///
    /// Placement is atomic: every cell of the ship is checked before any state
    /// changes, so a rejected ship leaves the board exactly as it was. The
    /// rejected ship is returned inside the error.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlaceError> {
        for coord in ship.cells() {
            if !self.grid.in_bounds(coord) {
                return Err(PlaceError::new(CannotPlaceReason::OutOfBounds, ship));
            }
            if self.occupied.contains(&coord) {
                return Err(PlaceError::new(CannotPlaceReason::Occupied, ship));
            }
        }
        // Already ensured that every cell is in bounds and unoccupied.
        for coord in ship.cells() {
            self.grid[coord] = CellState::Ship;
            self.occupied.insert(coord);
        }
        for coord in ship.cells() {
            for neighbor in grid::neighbors(coord, self.grid.size()) {
                self.occupied.insert(neighbor);
            }
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Finish setup and start the playing phase.
    ///
    /// The placement bookkeeping is discarded: every in-bounds cell of the
    /// resulting [`Board`] starts out shootable, buffer zones included.
    pub fn start(self) -> Board {
        Board {
            grid: self.grid,
            ships: self.ships,
            shots: HashSet::new(),
            destroyed: 0,
            revealed: true,
        }
    }
}
