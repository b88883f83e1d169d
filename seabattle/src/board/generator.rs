//! Random board generation.

use log::{debug, trace};
use rand::Rng;

use crate::{
    board::{Board, BoardSetup, Coordinate, GenerateError},
    config::{BOARD_ATTEMPTS, BOARD_SIZE, FLEET, PLACEMENT_ATTEMPTS},
    ships::Ship,
};

/// Places a fleet manifest onto empty boards until an arrangement works out.
///
/// Origins and orientations are sampled uniformly. A board that fails to take
/// the whole fleet within the per-board attempt budget is thrown away and a
/// fresh board is started.
pub struct BoardGenerator<'a> {
    fleet: &'a [usize],
    size: usize,
}

impl<'a> BoardGenerator<'a> {
    /// Create a generator for the given fleet manifest and board size.
    pub fn new(fleet: &'a [usize], size: usize) -> Self {
        Self { fleet, size }
    }

    /// The fleet manifest boards are generated for.
    pub fn fleet(&self) -> &[usize] {
        self.fleet
    }

    /// Edge length of the boards generated.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Generate a board with the full fleet placed, ready for play.
    ///
    /// Fails once [`BOARD_ATTEMPTS`] boards in a row have been abandoned,
    /// which in practice means the fleet does not fit the board size.
    pub fn generate(&self, rng: &mut impl Rng) -> Result<Board, GenerateError> {
        for attempt in 0..BOARD_ATTEMPTS {
            match self.try_generate(rng) {
                Some(board) => {
                    debug!("board generated on attempt {}", attempt + 1);
                    return Ok(board);
                }
                None => trace!("board attempt {} ran out of placement tries", attempt + 1),
            }
        }
        Err(GenerateError::new(
            self.fleet.to_vec(),
            self.size,
            BOARD_ATTEMPTS,
        ))
    }

    /// Try to fill one board with the fleet, longest ships first as listed in
    /// the manifest.
    ///
    /// The placement attempt budget is shared across the whole fleet rather
    /// than reset per ship.
    fn try_generate(&self, rng: &mut impl Rng) -> Option<Board> {
        let mut setup = BoardSetup::new(self.size);
        let mut attempts = 0;
        for &length in self.fleet {
            loop {
                if attempts >= PLACEMENT_ATTEMPTS {
                    return None;
                }
                attempts += 1;
                let ship = Ship::new(self.random_origin(rng), length, rng.gen());
                if setup.place_ship(ship).is_ok() {
                    break;
                }
            }
        }
        Some(setup.start())
    }

    /// Sample an origin cell. The upper bound is one past the last valid
    /// index; placement validation rejects the overshoot.
    fn random_origin(&self, rng: &mut impl Rng) -> Coordinate {
        Coordinate::new(
            rng.gen_range(0, self.size + 1),
            rng.gen_range(0, self.size + 1),
        )
    }
}

impl Default for BoardGenerator<'static> {
    /// Generator for the standard fleet on the standard board.
    fn default() -> Self {
        Self::new(&FLEET, BOARD_SIZE)
    }
}
