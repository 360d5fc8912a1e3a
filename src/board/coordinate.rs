//! The canonical grid underlying the whole board.

/// A point on the 17×17 super-grid that every board position projects
/// onto. Both axes run 1 through 17; only a subset of grid points carry a
/// playable cell (see [`Position`][crate::board::Position]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Grid row, counted from the south edge.
    pub r: u8,
    /// Grid column, counted from the west edge.
    pub c: u8,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given row and column.
    pub fn new(r: u8, c: u8) -> Self {
        Self { r, c }
    }

    /// The grid point offset from this one by `(dr, dc)`, or `None` if
    /// the offset leaves the super-grid.
    pub(crate) fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let r = self.r as i16 + dr as i16;
        let c = self.c as i16 + dc as i16;
        if (1..=17).contains(&r) && (1..=17).contains(&c) {
            Some(Self::new(r as u8, c as u8))
        } else {
            None
        }
    }
}

impl From<(u8, u8)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(r, c)` pair.
    fn from((r, c): (u8, u8)) -> Self {
        Self::new(r, c)
    }
}

impl From<Coordinate> for (u8, u8) {
    /// Convert the [`Coordinate`] into an `(r, c)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.r, coord.c)
    }
}
