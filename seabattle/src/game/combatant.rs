//! Combatants: the decision-makers that pick targets during a match.

use log::debug;
use rand::Rng;

use crate::board::{Board, Coordinate, ShotError, ShotOutcome};

/// A combatant in a match: whoever or whatever picks the cells to fire at.
///
/// Both kinds take turns the same way: pick a target, and if the board rejects
/// it, pick again until a shot resolves.
pub enum Combatant<'a> {
    /// Fires at cells picked uniformly at random, with no memory of its
    /// earlier shots.
    Automated,
    /// Defers target choice to a callback, usually one that prompts a person.
    /// The callback receives the rejection of its previous choice, if any, so
    /// it can be reported before asking again.
    Interactive(Box<dyn FnMut(Option<&ShotError>) -> Coordinate + 'a>),
}

impl<'a> Combatant<'a> {
    /// Create a combatant that picks targets uniformly at random.
    pub fn automated() -> Self {
        Combatant::Automated
    }

    /// Create a combatant that defers target choice to `choose`.
    pub fn interactive(choose: impl FnMut(Option<&ShotError>) -> Coordinate + 'a) -> Self {
        Combatant::Interactive(Box::new(choose))
    }

    /// Fire one resolved shot at the target board.
    ///
    /// Picks targets until the board accepts one, so this returns only once a
    /// fresh in-bounds cell has been shot. Returns the cell and what the shot
    /// did to it.
    pub fn take_shot(
        &mut self,
        rng: &mut impl Rng,
        target: &mut Board,
    ) -> (Coordinate, ShotOutcome) {
        let mut rejection = None;
        loop {
            let coord = self.choose_target(rng, target.size(), rejection.as_ref());
            match target.shoot(coord) {
                Ok(outcome) => return (coord, outcome),
                Err(err) => {
                    debug!("rejected shot: {}", err);
                    rejection = Some(err);
                }
            }
        }
    }

    /// Pick the next cell to fire at.
    fn choose_target(
        &mut self,
        rng: &mut impl Rng,
        size: usize,
        rejection: Option<&ShotError>,
    ) -> Coordinate {
        match self {
            Combatant::Automated => Coordinate::new(rng.gen_range(0, size), rng.gen_range(0, size)),
            Combatant::Interactive(choose) => choose(rejection),
        }
    }
}
