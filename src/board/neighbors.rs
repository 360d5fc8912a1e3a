//! Board adjacency: the cells a piece standing on a given position may
//! reach in a single step, derived from the position's terrain type.

use crate::board::{Battlefield, Position, PositionType};

/// The four orthogonal offsets on the canonical grid.
const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// The four diagonal offsets on the canonical grid.
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Offsets connecting the nine-palace loop track. Palace cells sit two
/// grid steps apart, so plain ±1 steps land between the lattice points.
const PALACE_LOOP: [(i8, i8); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

impl Position {
    /// Iterate the positions adjacent to this one under the terrain
    /// rules:
    ///
    /// * base camps have no exits;
    /// * roads step to the orthogonally adjacent cells;
    /// * sanctuaries step to all eight surrounding cells;
    /// * railways step orthogonally, spliced twice over: inside the
    ///   nine-palace each cell joins the loop cells two grid steps away,
    ///   and each camp's outer corners join the facing corner of the
    ///   neighboring camp, closing the rail ring around the board.
    ///
    /// Grid points that carry no playable cell are skipped silently. The
    /// iterator never yields this position itself and never yields
    /// duplicates.
    ///
    /// Adjacency is directional: it describes moves *from* this position,
    /// so a sanctuary reaches its diagonal neighbors even though none of
    /// them reach back diagonally.
    pub fn neighbors(&self) -> Neighbors {
        let mut candidates = Vec::new();
        match self.kind() {
            PositionType::BaseCamp => {}
            PositionType::Road => self.push_offsets(&ORTHOGONAL, &mut candidates),
            PositionType::Sanctuary => {
                self.push_offsets(&ORTHOGONAL, &mut candidates);
                self.push_offsets(&DIAGONAL, &mut candidates);
            }
            PositionType::Railway => {
                self.push_offsets(&ORTHOGONAL, &mut candidates);
                self.push_splices(&mut candidates);
            }
        }
        Neighbors(candidates.into_iter())
    }

    /// Whether `other` is adjacent to this position.
    pub fn is_neighbor(&self, other: &Position) -> bool {
        self.neighbors().any(|n| n == *other)
    }

    fn push_offsets(&self, offsets: &[(i8, i8)], out: &mut Vec<Position>) {
        for &(dr, dc) in offsets {
            if let Some(next) = self.offset(dr, dc) {
                out.push(next);
            }
        }
    }

    /// Railway splices beyond plain grid adjacency.
    fn push_splices(&self, out: &mut Vec<Position>) {
        match self.battlefield() {
            Battlefield::NinePalace => {
                for &(dr, dc) in PALACE_LOOP.iter() {
                    if let Some(next) = self.offset(dr, dc) {
                        if next.battlefield() == Battlefield::NinePalace {
                            out.push(next);
                        }
                    }
                }
            }
            Battlefield::Camp(camp) if self.row() == 1 => {
                // The outer rail line rings the whole board: each camp's
                // front corners meet the facing corner of the next camp.
                if self.col() == 1 {
                    out.push(Position::camp_cell(camp.prev(), 1, 5));
                } else if self.col() == 5 {
                    out.push(Position::camp_cell(camp.next(), 1, 1));
                }
            }
            Battlefield::Camp(_) => {}
        }
    }
}

/// Iterator over the neighbors of a [`Position`].
#[derive(Debug)]
pub struct Neighbors(std::vec::IntoIter<Position>);

impl Iterator for Neighbors {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        self.0.next()
    }
}
