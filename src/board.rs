//! Types that make up the game board: the canonical coordinate system,
//! cell classification, board adjacency, and the occupancy oracle the
//! rules engine runs against.

use crate::pieces::Piece;
use crate::player::Player;

pub use self::{
    coordinate::Coordinate,
    errors::{CannotMoveReason, InvalidPosition, MoveError},
    grid::GridBoard,
    neighbors::Neighbors,
    position::{Battlefield, Position, PositionType},
};

mod coordinate;
mod errors;
mod grid;
mod neighbors;
mod position;

/// Occupancy and alliance oracle consulted by the rules engine.
///
/// The store behind this trait owns piece placement, turn sequencing and
/// whatever concurrency control the session layer needs. This crate only
/// reads occupancy and alliances from it, and mutates it through a single
/// [`relocate`] call once a move has been validated.
///
/// [`relocate`]: Board::relocate
pub trait Board {
    /// The piece occupying `position`, if any.
    fn occupant(&self, position: &Position) -> Option<&Piece>;

    /// Whether two seats are allied. Must be symmetric, and every seat is
    /// allied with itself.
    fn are_allied(&self, a: Player, b: Player) -> bool;

    /// Move the piece at `from` onto `to`, displacing any defeated
    /// occupant. The rules layer calls this only with a validated target.
    fn relocate(&mut self, from: Position, to: Position);
}
