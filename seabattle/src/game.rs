//! Match orchestration: two boards, two combatants, alternating turns.

use log::debug;
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::board::{Board, Coordinate, ShotOutcome};

pub use self::combatant::Combatant;

mod combatant;

/// Player ID for a match. Either `P1` or `P2`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    P1,
    P2,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::P1 => Side::P2,
            Side::P2 => Side::P1,
        }
    }

    /// Index of this side into the match's per-side arrays.
    fn index(self) -> usize {
        match self {
            Side::P1 => 0,
            Side::P2 => 1,
        }
    }
}

impl Distribution<Side> for Standard {
    /// Picks one of the two sides with equal probability.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Side {
        if rng.gen() {
            Side::P1
        } else {
            Side::P2
        }
    }
}

/// Overall status of a match.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MatchState {
    /// The match is still being played.
    InProgress,
    /// The match is over: the winner's opponent has no ships left.
    Finished {
        /// Side whose fleet survived.
        winner: Side,
    },
}

/// Record of one resolved shot, as returned by [`Match::step`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShotRecord {
    /// Side that fired the shot.
    pub side: Side,
    /// Cell the shot landed on.
    pub target: Coordinate,
    /// What the shot did.
    pub outcome: ShotOutcome,
}

/// A match between two combatants, each firing at the other's board.
///
/// The match owns both boards and both combatants and advances one resolved
/// shot at a time through [`step`].
///
/// [`step`]: Match::step
pub struct Match<'a> {
    boards: [Board; 2],
    combatants: [Combatant<'a>; 2],
    turn: Side,
    state: MatchState,
}

impl<'a> Match<'a> {
    /// Start a match between the given combatants, each defending the board
    /// at its own side's position. Both arrays are indexed with `P1` first,
    /// and `first` moves first.
    pub fn new(boards: [Board; 2], combatants: [Combatant<'a>; 2], first: Side) -> Self {
        Self {
            boards,
            combatants,
            turn: first,
            state: MatchState::InProgress,
        }
    }

    /// Get the side whose turn it currently is.
    pub fn current(&self) -> Side {
        self.turn
    }

    /// Get the status of the match.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Get the winner. Returns `None` while the match is in progress.
    pub fn winner(&self) -> Option<Side> {
        match self.state {
            MatchState::InProgress => None,
            MatchState::Finished { winner } => Some(winner),
        }
    }

    /// Get the board defended by the given side.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Play one turn: the current side fires one resolved shot at its
    /// opponent's board.
    ///
    /// A hit or a destroyed ship keeps the turn with the shooter; a miss
    /// passes it to the opponent. Destroying the last ship finishes the
    /// match. Returns `None` once the match is finished.
    pub fn step(&mut self, rng: &mut impl Rng) -> Option<ShotRecord> {
        if let MatchState::Finished { .. } = self.state {
            return None;
        }
        let side = self.turn;
        let opponent = side.opponent();
        let combatant = &mut self.combatants[side.index()];
        let board = &mut self.boards[opponent.index()];
        let (target, outcome) = combatant.take_shot(rng, board);
        if board.defeated() {
            debug!("{:?} defeated, {:?} wins", opponent, side);
            self.state = MatchState::Finished { winner: side };
        } else if outcome == ShotOutcome::Miss {
            self.turn = opponent;
        }
        Some(ShotRecord {
            side,
            target,
            outcome,
        })
    }
}
