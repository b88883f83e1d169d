//! Engine for the Russian flavor of the sea battle game.
//!
//! Two players each hide a small fleet on a 6x6 grid and take turns firing at
//! the other's grid. Ships are straight lines of one to three cells and may
//! not touch each other, not even diagonally. A hit earns another shot; a miss
//! passes the turn. The first player to wreck the entire opposing fleet wins.
//!
//! The crate splits along the phases of a game:
//!
//! - [`board`] holds a single player's side of the ocean: setup and random
//!   generation, then shot resolution during play.
//! - [`ships`] defines ship shapes and their hit accounting.
//! - [`game`] drives a full match between two combatants.
//! - [`config`] carries the standard board size, fleet, and retry budgets.
//!
//! The engine never prints. Anything worth surfacing is emitted through the
//! [`log`] facade, and rendering is left to whatever frontend owns the match.

pub mod board;
pub mod config;
pub mod game;
pub mod ships;
