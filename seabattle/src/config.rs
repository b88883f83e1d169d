//! Game configuration constants.

/// Number of cells along each edge of a standard board.
pub const BOARD_SIZE: usize = 6;

/// Ship lengths making up a standard fleet, in placement order.
pub const FLEET: [usize; 6] = [3, 2, 2, 1, 1, 1];

/// Placement attempts shared across one whole board before it is abandoned.
pub const PLACEMENT_ATTEMPTS: usize = 2000;

/// Abandoned boards tolerated before generation fails outright.
pub const BOARD_ATTEMPTS: usize = 100;
