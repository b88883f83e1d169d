//! Errors used by the `Board`, `BoardSetup`, and `BoardGenerator`.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::Coordinate;
use crate::ships::Ship;

/// Reason why a ship could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more of the ship's cells fell outside the board.
    #[error("part of the ship fell outside the board")]
    OutOfBounds,
    /// One or more of the ship's cells was already occupied, either by another
    /// ship or by the buffer zone around one.
    #[error("the requested position was already occupied")]
    Occupied,
}

/// Error caused when attempting to place a ship in an invalid position.
///
/// Carries the rejected ship, so callers can retry it elsewhere.
#[derive(Error)]
#[error("could not place ship: {reason:?}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    ship: Ship,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Construct a placement error from a reason and the rejected ship.
    pub(super) fn new(reason: CannotPlaceReason, ship: Ship) -> Self {
        Self { reason, ship }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the ship whose placement was rejected.
    pub fn ship(&self) -> Ship {
        self.ship
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    OutOfBounds,

    /// A shot has already been fired at that cell.
    AlreadyShot,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error)]
#[error("could not shoot cell {coord:?}: {reason:?}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}

/// Error returned when board generation ran out of attempts.
///
/// This means the configured fleet does not fit the configured board size, or
/// fits it so tightly that random placement cannot be expected to find an
/// arrangement.
#[derive(Debug, Error)]
#[error("no valid arrangement of fleet {fleet:?} on a {size}x{size} board after {attempts} tries")]
pub struct GenerateError {
    fleet: Vec<usize>,
    size: usize,
    attempts: usize,
}

impl GenerateError {
    /// Construct a generation error for the given fleet and board size.
    pub(super) fn new(fleet: Vec<usize>, size: usize, attempts: usize) -> Self {
        Self {
            fleet,
            size,
            attempts,
        }
    }

    /// The fleet manifest that could not be placed.
    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Edge length of the board generation was attempted on.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of whole-board attempts made before giving up.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}
