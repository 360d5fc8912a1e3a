//! Board positions and the canonical coordinate system.
//!
//! Every playable cell lives on a 17×17 super-grid: the nine-palace
//! occupies the odd grid points of the central 7-11 square, and the four
//! camps occupy 6×5 blocks abutting it on each side. Clients address
//! cells egocentrically (battlefield/row/col relative to their own seat);
//! [`Position::from_relative`] resolves that frame onto the canonical
//! grid, and [`Position::try_from_coordinate`] goes the other way.

use crate::board::{Coordinate, InvalidPosition};
use crate::player::Player;

/// Region of the board a position belongs to: the shared central
/// nine-palace, or one of the four player camps.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Battlefield {
    /// The 3×3 zone at the center of the board, shared by all players.
    NinePalace,
    /// The 6×5 camp owned by the given seat.
    Camp(Player),
}

impl Battlefield {
    /// The battlefield number: 0 for the nine-palace, 1-4 for the camps.
    pub fn index(self) -> u8 {
        match self {
            Battlefield::NinePalace => 0,
            Battlefield::Camp(seat) => seat.seat(),
        }
    }

    /// The seat owning this battlefield, if it is a camp.
    pub fn camp(self) -> Option<Player> {
        match self {
            Battlefield::NinePalace => None,
            Battlefield::Camp(seat) => Some(seat),
        }
    }
}

/// Terrain type of a single cell, fixed by the board layout.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PositionType {
    /// 大本营. Pieces that reach a base camp never move again.
    BaseCamp,
    /// 铁路. Permits long-distance movement along the rail network.
    Railway,
    /// 公路. Permits single orthogonal steps.
    Road,
    /// 行营. Entered diagonally as well; occupants cannot be attacked.
    Sanctuary,
}

impl PositionType {
    /// Classify a cell from its battlefield-relative row and column.
    /// Rows and columns are validated before classification.
    fn classify(battlefield: Battlefield, row: u8, col: u8) -> Self {
        match battlefield {
            Battlefield::NinePalace => PositionType::Railway,
            Battlefield::Camp(_) => match (row, col) {
                (1, _) | (5, _) => PositionType::Railway,
                (2, 1) | (2, 5) | (4, 1) | (4, 5) => PositionType::Railway,
                (2, 2) | (2, 4) | (4, 2) | (4, 4) => PositionType::Sanctuary,
                (2, _) | (4, _) => PositionType::Road,
                (3, 1) | (3, 5) => PositionType::Railway,
                (3, 2) | (3, 4) => PositionType::Road,
                (3, _) => PositionType::Sanctuary,
                (6, 2) | (6, 4) => PositionType::BaseCamp,
                (6, _) => PositionType::Road,
                _ => unreachable!("row {} is not a camp row", row),
            },
        }
    }
}

/// A single cell of the board.
///
/// A position is identified by its canonical coordinate; the battlefield,
/// row and column describe the same cell in the canonical view (seat 1's
/// frame), and the terrain type is derived from them. Two positions are
/// equal exactly when their canonical coordinates are equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Position {
    battlefield: Battlefield,
    row: u8,
    col: u8,
    coord: Coordinate,
    kind: PositionType,
}

impl Position {
    /// Resolve a player's egocentric coordinates to a canonical position.
    ///
    /// `battlefield` is numbered in the caller's own frame: 0 is the
    /// shared nine-palace and 1 is always the caller's own camp, with 2-4
    /// continuing around the table. `view` names the seat whose frame the
    /// coordinates are expressed in; it never changes which cell is
    /// meant, only how the numbers are read.
    pub fn from_relative(
        battlefield: u8,
        row: u8,
        col: u8,
        view: Player,
    ) -> Result<Self, InvalidPosition> {
        match battlefield {
            0 => {
                if !(1..=3).contains(&row) {
                    return Err(InvalidPosition::Row { battlefield, row });
                }
                if !(1..=3).contains(&col) {
                    return Err(InvalidPosition::Col { battlefield, col });
                }
                // Rotate the caller's 3×3 frame onto the canonical view.
                let (row, col) = match view {
                    Player::South => (row, col),
                    Player::East => (4 - col, row),
                    Player::North => (4 - row, 4 - col),
                    Player::West => (col, 4 - row),
                };
                let battlefield = Battlefield::NinePalace;
                Ok(Self {
                    battlefield,
                    row,
                    col,
                    coord: Coordinate::new(13 - 2 * row, 2 * col + 5),
                    kind: PositionType::classify(battlefield, row, col),
                })
            }
            1..=4 => {
                if !(1..=6).contains(&row) {
                    return Err(InvalidPosition::Row { battlefield, row });
                }
                if !(1..=5).contains(&col) {
                    return Err(InvalidPosition::Col { battlefield, col });
                }
                // The caller's camp 1 is their own camp; step the
                // numbering around the table to the absolute seat.
                Ok(Self::camp_cell(view.advance(battlefield - 1), row, col))
            }
            _ => Err(InvalidPosition::Battlefield(battlefield)),
        }
    }

    /// The cell of `camp` at the given canonical-view row and column.
    /// Row and column must already be in range.
    pub(crate) fn camp_cell(camp: Player, row: u8, col: u8) -> Self {
        let coord = match camp {
            Player::South => Coordinate::new(7 - row, 6 + col),
            Player::East => Coordinate::new(6 + col, 11 + row),
            Player::North => Coordinate::new(11 + row, 12 - col),
            Player::West => Coordinate::new(12 - col, 7 - row),
        };
        let battlefield = Battlefield::Camp(camp);
        Self {
            battlefield,
            row,
            col,
            coord,
            kind: PositionType::classify(battlefield, row, col),
        }
    }

    /// Resolve a canonical grid point to a position, returning `None` for
    /// grid points that carry no playable cell. Adjacency probing uses
    /// this form to test many speculative cells; use
    /// [`from_coordinate`][Self::from_coordinate] to reject malformed
    /// caller input with an error instead.
    pub fn try_from_coordinate(coord: Coordinate) -> Option<Self> {
        let Coordinate { r, c } = coord;
        let (battlefield, row, col) = if (7..=11).contains(&r) && (7..=11).contains(&c) {
            // The center lattice only has cells at odd grid points.
            if r % 2 == 0 || c % 2 == 0 {
                return None;
            }
            (Battlefield::NinePalace, (11 - r) / 2 + 1, (c - 7) / 2 + 1)
        } else if (1..=6).contains(&r) && (7..=11).contains(&c) {
            (Battlefield::Camp(Player::South), 7 - r, c - 6)
        } else if (7..=11).contains(&r) && (12..=17).contains(&c) {
            (Battlefield::Camp(Player::East), c - 11, r - 6)
        } else if (12..=17).contains(&r) && (7..=11).contains(&c) {
            (Battlefield::Camp(Player::North), r - 11, 12 - c)
        } else if (7..=11).contains(&r) && (1..=6).contains(&c) {
            (Battlefield::Camp(Player::West), 7 - c, 12 - r)
        } else {
            return None;
        };
        Some(Self {
            battlefield,
            row,
            col,
            coord,
            kind: PositionType::classify(battlefield, row, col),
        })
    }

    /// Resolve a canonical grid point to a position.
    pub fn from_coordinate(coord: Coordinate) -> Result<Self, InvalidPosition> {
        Self::try_from_coordinate(coord).ok_or(InvalidPosition::Unplayable { coord })
    }

    /// The battlefield this position belongs to.
    pub fn battlefield(&self) -> Battlefield {
        self.battlefield
    }

    /// Row within the battlefield, in the canonical view.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column within the battlefield, in the canonical view.
    pub fn col(&self) -> u8 {
        self.col
    }

    /// The canonical grid point of this position.
    pub fn coordinate(&self) -> Coordinate {
        self.coord
    }

    /// Terrain type of this position.
    pub fn kind(&self) -> PositionType {
        self.kind
    }

    /// The position offset from this one by `(dr, dc)` on the canonical
    /// grid, or `None` if that grid point carries no playable cell.
    pub(crate) fn offset(&self, dr: i8, dc: i8) -> Option<Self> {
        self.coord.offset(dr, dc).and_then(Self::try_from_coordinate)
    }
}
