//! Player seats and seat arithmetic.

use enumflags2::BitFlags;

/// One of the four seats around the board, named for the compass position
/// of the camp it owns. Seats double as player identifiers throughout the
/// crate, and sets of seats are cheap [`BitFlags`].
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Player {
    /// Seat 1, owner of the south camp.
    South = 0b0001,
    /// Seat 2, owner of the east camp.
    East = 0b0010,
    /// Seat 3, owner of the north camp.
    North = 0b0100,
    /// Seat 4, owner of the west camp.
    West = 0b1000,
}

impl Player {
    /// All four seats in seating order.
    pub const ALL: [Player; 4] = [Player::South, Player::East, Player::North, Player::West];

    /// The seat number, 1 through 4.
    pub fn seat(self) -> u8 {
        match self {
            Player::South => 1,
            Player::East => 2,
            Player::North => 3,
            Player::West => 4,
        }
    }

    /// Look up a seat by its number. Returns `None` unless `seat` is 1-4.
    pub fn from_seat(seat: u8) -> Option<Self> {
        match seat {
            1 => Some(Player::South),
            2 => Some(Player::East),
            3 => Some(Player::North),
            4 => Some(Player::West),
            _ => None,
        }
    }

    /// The seat `steps` places further around the table.
    pub fn advance(self, steps: u8) -> Self {
        match (self.seat() - 1 + steps % 4) % 4 {
            0 => Player::South,
            1 => Player::East,
            2 => Player::North,
            3 => Player::West,
            // Reduced mod 4 above.
            _ => unreachable!(),
        }
    }

    /// The next seat around the table.
    pub fn next(self) -> Self {
        self.advance(1)
    }

    /// The previous seat around the table.
    pub fn prev(self) -> Self {
        self.advance(3)
    }

    /// The seat directly across the table. Standard four-player games ally
    /// opposite seats, though the alliance relation itself is supplied by
    /// the board layer.
    pub fn partner(self) -> Self {
        self.advance(2)
    }
}
