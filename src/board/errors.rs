//! Errors surfaced by position construction and move validation.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::board::{Coordinate, Position};

/// Error returned when caller input does not name a board position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum InvalidPosition {
    /// The battlefield number was outside 0-4.
    #[error("battlefield {0} is out of range")]
    Battlefield(u8),
    /// The row was outside the battlefield's range.
    #[error("row {row} is out of range for battlefield {battlefield}")]
    Row {
        /// Battlefield the row was given for.
        battlefield: u8,
        /// The rejected row.
        row: u8,
    },
    /// The column was outside the battlefield's range.
    #[error("column {col} is out of range for battlefield {battlefield}")]
    Col {
        /// Battlefield the column was given for.
        battlefield: u8,
        /// The rejected column.
        col: u8,
    },
    /// The grid point carries no playable cell.
    #[error("grid point {coord:?} is not a playable position")]
    Unplayable {
        /// The rejected grid point.
        coord: Coordinate,
    },
}

/// Reason why a requested move was rejected.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotMoveReason {
    /// No piece occupies the origin position.
    #[error("no piece occupies the origin position")]
    VacantOrigin,
    /// The piece can never move: it is a mine, or it sits on a base camp.
    #[error("the piece cannot leave its current position")]
    Immobile,
    /// The target cannot be reached from the origin in one move.
    #[error("the target is not reachable from the origin")]
    Unreachable,
    /// The target is held by an allied piece.
    #[error("the target is occupied by an allied piece")]
    OccupiedByAlly,
    /// The target is an occupied sanctuary, which no piece may capture
    /// into.
    #[error("the target sanctuary is occupied")]
    SanctuaryOccupied,
}

/// Error returned when a move request is not allowed. The board is left
/// untouched whenever this is returned.
#[derive(Error, Copy, Clone, Eq, PartialEq)]
#[error("cannot move to {target:?}: {reason}")]
pub struct MoveError {
    /// Reason the move was rejected.
    #[source]
    reason: CannotMoveReason,

    /// The requested target position.
    target: Position,
}

impl MoveError {
    /// Construct a move error for the given target with the given reason.
    pub(crate) fn new(reason: CannotMoveReason, target: Position) -> Self {
        Self { reason, target }
    }

    /// Get the reason the move was rejected.
    pub fn reason(&self) -> CannotMoveReason {
        self.reason
    }

    /// Get the target position the move requested.
    pub fn target(&self) -> &Position {
        &self.target
    }
}

impl Debug for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
