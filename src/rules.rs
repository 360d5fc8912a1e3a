//! Move legality and execution: what the adjacency engine permits,
//! filtered through the occupancy oracle.
//!
//! Legality is always computed in full before anything is mutated, so a
//! rejected move leaves the board exactly as it was.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::board::{Board, CannotMoveReason, MoveError, Position, PositionType};
use crate::pieces::{resolve, CombatOutcome, Piece};

/// Result of a validated, executed move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MoveOutcome {
    /// The piece moved into an empty cell.
    Moved,
    /// The move landed on an enemy piece and combat was resolved. The
    /// attacker occupies the target only on
    /// [`CombatOutcome::AttackerWins`]; removing the losers and flipping
    /// visibility is the board layer's job.
    Combat(CombatOutcome),
}

/// A cell the moving piece could geometrically enter, with its occupant.
struct Reach<'a> {
    position: Position,
    occupant: Option<&'a Piece>,
}

/// Walk every cell `piece` could geometrically enter this move.
///
/// Single steps go to the origin's neighbors. A piece on railway slides
/// further: the slide continues through empty railway cells and stops at
/// the first occupant in each direction. It never leaves the railway
/// mid-move, so non-railway cells are only enterable as direct neighbors
/// of the origin.
fn reach<'a, B: Board>(board: &'a B, piece: &Piece) -> Vec<Reach<'a>> {
    let origin = *piece.position();
    if origin.kind() == PositionType::BaseCamp || !piece.rank().is_mobile() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    seen.insert(origin.coordinate());
    let mut cells = Vec::new();
    let mut rail_frontier = Vec::new();

    for next in origin.neighbors() {
        if !seen.insert(next.coordinate()) {
            continue;
        }
        let occupant = board.occupant(&next);
        if origin.kind() == PositionType::Railway
            && next.kind() == PositionType::Railway
            && occupant.is_none()
        {
            rail_frontier.push(next);
        }
        cells.push(Reach {
            position: next,
            occupant,
        });
    }

    while let Some(node) = rail_frontier.pop() {
        for next in node.neighbors() {
            if next.kind() != PositionType::Railway {
                continue;
            }
            if !seen.insert(next.coordinate()) {
                continue;
            }
            let occupant = board.occupant(&next);
            if occupant.is_none() {
                rail_frontier.push(next);
            }
            cells.push(Reach {
                position: next,
                occupant,
            });
        }
    }
    cells
}

/// Whether `piece` may actually enter the cell given its occupancy.
/// Occupied sanctuaries admit nobody; other occupied cells admit only
/// non-allied attackers.
fn enterable<B: Board>(board: &B, piece: &Piece, cell: &Reach) -> bool {
    match cell.occupant {
        None => true,
        Some(_) if cell.position.kind() == PositionType::Sanctuary => false,
        Some(other) => !board.are_allied(piece.owner(), other.owner()),
    }
}

/// Every position `piece` may legally move to.
///
/// Empty for mines and for pieces on a base camp. Railway pieces may
/// travel the connected rail network any distance until blocked; all
/// other movement is a single step into an adjacent cell.
pub fn accessible_positions<B: Board>(board: &B, piece: &Piece) -> HashSet<Position> {
    reach(board, piece)
        .iter()
        .filter(|cell| enterable(board, piece, cell))
        .map(|cell| cell.position)
        .collect()
}

/// Whether `target` is a legal destination for `piece`.
pub fn is_accessible<B: Board>(board: &B, piece: &Piece, target: &Position) -> bool {
    reach(board, piece)
        .iter()
        .any(|cell| cell.position == *target && enterable(board, piece, cell))
}

/// Validate and execute the move of the piece at `from` onto `to`.
///
/// A legal move into an empty cell relocates the piece. A legal move onto
/// an enemy resolves combat and relocates the piece only if it wins; the
/// outcome is returned for the board layer to apply removals and
/// reveals. On any error the board is untouched.
#[instrument(skip(board))]
pub fn try_move<B: Board>(
    board: &mut B,
    from: Position,
    to: Position,
) -> Result<MoveOutcome, MoveError> {
    let attacker = match board.occupant(&from) {
        Some(piece) => piece.clone(),
        None => return Err(MoveError::new(CannotMoveReason::VacantOrigin, to)),
    };
    if from.kind() == PositionType::BaseCamp || !attacker.rank().is_mobile() {
        return Err(MoveError::new(CannotMoveReason::Immobile, to));
    }

    let cells = reach(board, &attacker);
    let defender = match cells.iter().find(|cell| cell.position == to) {
        None => return Err(MoveError::new(CannotMoveReason::Unreachable, to)),
        Some(cell) => cell.occupant.map(|piece| (piece.rank(), piece.owner())),
    };

    match defender {
        None => {
            board.relocate(from, to);
            debug!(?from, ?to, "moved");
            Ok(MoveOutcome::Moved)
        }
        Some((defender_rank, defender_owner)) => {
            if board.are_allied(attacker.owner(), defender_owner) {
                return Err(MoveError::new(CannotMoveReason::OccupiedByAlly, to));
            }
            if to.kind() == PositionType::Sanctuary {
                return Err(MoveError::new(CannotMoveReason::SanctuaryOccupied, to));
            }
            let outcome = match resolve(attacker.rank(), defender_rank) {
                Ok(outcome) => outcome,
                // Mines are immobile, so they never get this far.
                Err(_) => unreachable!(),
            };
            if outcome == CombatOutcome::AttackerWins {
                board.relocate(from, to);
            }
            debug!(?from, ?to, ?outcome, "combat resolved");
            Ok(MoveOutcome::Combat(outcome))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Coordinate, GridBoard};
    use crate::pieces::Rank;
    use crate::player::Player;

    use super::*;

    fn camp(seat: Player, row: u8, col: u8) -> Position {
        Position::camp_cell(seat, row, col)
    }

    fn place(board: &mut GridBoard, rank: Rank, owner: Player, pos: Position) -> Piece {
        let piece = Piece::new(rank, owner, pos);
        board.place(piece.clone()).unwrap();
        piece
    }

    fn coords(expect: &[Position]) -> HashSet<Position> {
        expect.iter().copied().collect()
    }

    #[test]
    fn enemy_on_open_ground_can_be_captured() {
        let mut board = GridBoard::new();
        let mover = place(
            &mut board,
            Rank::Captain,
            Player::South,
            camp(Player::South, 2, 3),
        );
        place(
            &mut board,
            Rank::Major,
            Player::East,
            camp(Player::South, 1, 3),
        );

        let accessible = accessible_positions(&board, &mover);
        assert_eq!(
            accessible,
            coords(&[
                camp(Player::South, 1, 3),
                camp(Player::South, 2, 2),
                camp(Player::South, 2, 4),
                camp(Player::South, 3, 3),
            ])
        );
    }

    #[test]
    fn allies_and_occupied_sanctuaries_block_entry() {
        let mut board = GridBoard::new();
        let mover = place(
            &mut board,
            Rank::Captain,
            Player::South,
            camp(Player::South, 2, 3),
        );
        // North partners South; its piece blocks the railway cell.
        place(
            &mut board,
            Rank::Major,
            Player::North,
            camp(Player::South, 1, 3),
        );
        // An enemy inside a sanctuary is safe from everyone.
        place(
            &mut board,
            Rank::Major,
            Player::East,
            camp(Player::South, 2, 2),
        );

        let accessible = accessible_positions(&board, &mover);
        assert_eq!(
            accessible,
            coords(&[camp(Player::South, 2, 4), camp(Player::South, 3, 3)])
        );
        assert!(!is_accessible(&board, &mover, &camp(Player::South, 1, 3)));
        assert!(!is_accessible(&board, &mover, &camp(Player::South, 2, 2)));
    }

    #[test]
    fn rejected_moves_report_their_reason_and_change_nothing() {
        let mut board = GridBoard::new();
        place(
            &mut board,
            Rank::Captain,
            Player::South,
            camp(Player::South, 2, 3),
        );
        place(
            &mut board,
            Rank::Major,
            Player::North,
            camp(Player::South, 1, 3),
        );
        place(
            &mut board,
            Rank::Major,
            Player::East,
            camp(Player::South, 2, 2),
        );

        let from = camp(Player::South, 2, 3);
        let err = try_move(&mut board, from, camp(Player::South, 1, 3)).unwrap_err();
        assert_eq!(err.reason(), CannotMoveReason::OccupiedByAlly);
        let err = try_move(&mut board, from, camp(Player::South, 2, 2)).unwrap_err();
        assert_eq!(err.reason(), CannotMoveReason::SanctuaryOccupied);
        let err = try_move(&mut board, from, camp(Player::South, 5, 5)).unwrap_err();
        assert_eq!(err.reason(), CannotMoveReason::Unreachable);
        let err = try_move(&mut board, camp(Player::South, 4, 4), from).unwrap_err();
        assert_eq!(err.reason(), CannotMoveReason::VacantOrigin);

        // Nothing moved.
        assert_eq!(board.occupant(&from).unwrap().rank(), Rank::Captain);
        assert_eq!(board.pieces().count(), 3);
    }

    #[test]
    fn base_camp_pieces_and_mines_are_immobile() {
        let mut board = GridBoard::new();
        let flagkeeper = place(
            &mut board,
            Rank::CommanderInChief,
            Player::South,
            camp(Player::South, 6, 2),
        );
        let mine = place(
            &mut board,
            Rank::Mine,
            Player::South,
            camp(Player::South, 5, 3),
        );

        assert!(accessible_positions(&board, &flagkeeper).is_empty());
        assert!(accessible_positions(&board, &mine).is_empty());

        let err = try_move(
            &mut board,
            camp(Player::South, 6, 2),
            camp(Player::South, 6, 1),
        )
        .unwrap_err();
        assert_eq!(err.reason(), CannotMoveReason::Immobile);
        let err = try_move(
            &mut board,
            camp(Player::South, 5, 3),
            camp(Player::South, 5, 2),
        )
        .unwrap_err();
        assert_eq!(err.reason(), CannotMoveReason::Immobile);
    }

    #[test]
    fn railway_pieces_slide_until_blocked() {
        let mut board = GridBoard::new();
        // The inner rail line: column 1 up from (5,1), row 5 across.
        let mover = place(
            &mut board,
            Rank::Colonel,
            Player::South,
            camp(Player::South, 5, 1),
        );
        // An ally blocks column 1 and an enemy blocks row 5.
        place(
            &mut board,
            Rank::Major,
            Player::North,
            camp(Player::South, 3, 1),
        );
        place(
            &mut board,
            Rank::Major,
            Player::East,
            camp(Player::South, 5, 4),
        );

        let accessible = accessible_positions(&board, &mover);
        assert_eq!(
            accessible,
            coords(&[
                // One plain step onto the road.
                camp(Player::South, 6, 1),
                // Up column 1 until the ally.
                camp(Player::South, 4, 1),
                // Across row 5 up to and including the enemy.
                camp(Player::South, 5, 2),
                camp(Player::South, 5, 3),
                camp(Player::South, 5, 4),
            ])
        );
        // The cells behind the blockers stay out of reach.
        assert!(!is_accessible(&board, &mover, &camp(Player::South, 2, 1)));
        assert!(!is_accessible(&board, &mover, &camp(Player::South, 5, 5)));
    }

    #[test]
    fn the_rail_ring_crosses_camp_boundaries() {
        let mut board = GridBoard::new();
        let mover = place(
            &mut board,
            Rank::Colonel,
            Player::South,
            camp(Player::South, 1, 5),
        );

        let accessible = accessible_positions(&board, &mover);
        // On an empty board the whole rail network is reachable: 9 palace
        // cells plus 16 per camp, minus the origin.
        assert_eq!(accessible.len(), 72);
        for position in &accessible {
            assert_eq!(position.kind(), PositionType::Railway);
        }
        assert!(accessible.contains(&camp(Player::East, 1, 1)));
        assert!(accessible.contains(&camp(Player::West, 5, 5)));
        assert!(accessible.contains(&Position::from_coordinate(Coordinate::new(9, 9)).unwrap()));
    }

    #[test]
    fn an_engineer_can_ride_the_rail_to_a_mine() {
        let mut board = GridBoard::new();
        place(
            &mut board,
            Rank::Engineer,
            Player::South,
            camp(Player::South, 1, 1),
        );
        place(
            &mut board,
            Rank::Mine,
            Player::West,
            camp(Player::West, 2, 5),
        );

        let outcome = try_move(
            &mut board,
            camp(Player::South, 1, 1),
            camp(Player::West, 2, 5),
        )
        .unwrap();
        assert_eq!(outcome, MoveOutcome::Combat(CombatOutcome::AttackerWins));
        let winner = board.occupant(&camp(Player::West, 2, 5)).unwrap();
        assert_eq!(winner.rank(), Rank::Engineer);
        assert!(board.occupant(&camp(Player::South, 1, 1)).is_none());
    }

    #[test]
    fn moving_into_an_empty_cell_relocates_the_piece() {
        let mut board = GridBoard::new();
        let from = camp(Player::South, 2, 3);
        let to = camp(Player::South, 3, 3);
        place(&mut board, Rank::Captain, Player::South, from);

        assert_eq!(try_move(&mut board, from, to), Ok(MoveOutcome::Moved));
        assert!(board.occupant(&from).is_none());
        assert_eq!(board.occupant(&to).unwrap().rank(), Rank::Captain);
    }

    #[test]
    fn losing_combat_leaves_the_board_to_the_judge() {
        let mut board = GridBoard::new();
        let from = camp(Player::South, 2, 3);
        let to = camp(Player::South, 1, 3);
        place(&mut board, Rank::Lieutenant, Player::South, from);
        place(&mut board, Rank::Captain, Player::East, to);

        let outcome = try_move(&mut board, from, to).unwrap();
        assert_eq!(outcome, MoveOutcome::Combat(CombatOutcome::DefenderWins));
        // The core only reports the outcome; removing the fallen attacker
        // is the owning store's job.
        assert_eq!(board.occupant(&from).unwrap().rank(), Rank::Lieutenant);
        assert_eq!(board.occupant(&to).unwrap().rank(), Rank::Captain);

        let outcome = try_move(&mut board, to, from).unwrap();
        assert_eq!(outcome, MoveOutcome::Combat(CombatOutcome::AttackerWins));
        assert_eq!(board.occupant(&from).unwrap().rank(), Rank::Captain);
        assert!(board.occupant(&to).is_none());
    }

    #[test]
    fn bombs_trade_with_anything() {
        let mut board = GridBoard::new();
        let from = camp(Player::South, 2, 3);
        let to = camp(Player::South, 1, 3);
        place(&mut board, Rank::Bomb, Player::South, from);
        place(&mut board, Rank::CommanderInChief, Player::East, to);

        let outcome = try_move(&mut board, from, to).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Combat(CombatOutcome::MutualDestruction)
        );
        // Neither side occupies the target through the core.
        assert_eq!(board.occupant(&from).unwrap().rank(), Rank::Bomb);
        assert_eq!(
            board.occupant(&to).unwrap().rank(),
            Rank::CommanderInChief
        );
    }

    #[test]
    fn a_step_may_end_on_a_base_camp() {
        let mut board = GridBoard::new();
        let from = camp(Player::South, 6, 1);
        let to = camp(Player::South, 6, 2);
        place(&mut board, Rank::Captain, Player::South, from);

        assert_eq!(try_move(&mut board, from, to), Ok(MoveOutcome::Moved));
        // Movement ends there for good.
        let parked = board.occupant(&to).unwrap().clone();
        assert!(accessible_positions(&board, &parked).is_empty());
    }

    #[test]
    fn piece_entry_points_agree_with_the_rules() {
        let mut board = GridBoard::new();
        let mover = place(
            &mut board,
            Rank::Captain,
            Player::South,
            camp(Player::South, 2, 3),
        );
        assert_eq!(
            mover.accessible_positions(&board),
            accessible_positions(&board, &mover)
        );
        let target = camp(Player::South, 3, 3);
        assert_eq!(
            mover.can_move_to(&board, &target),
            is_accessible(&board, &mover, &target)
        );
        assert_eq!(
            mover.attack(&Piece::new(Rank::Major, Player::East, target)),
            Ok(CombatOutcome::DefenderWins)
        );
    }
}
