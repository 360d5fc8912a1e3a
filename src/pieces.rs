//! Game pieces: ranks, hidden-rank visibility, and combat entry points.

use std::collections::HashSet;
use std::fmt;

use enumflags2::BitFlags;

use crate::board::{Board, Position};
use crate::player::Player;
use crate::rules;

pub use self::combat::{resolve, CombatOutcome, MineCannotAttack};

mod combat;

/// Rank of a piece. Discriminants are the classical strength values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Rank {
    /// 炸弹. Destroys whatever it fights, and itself.
    Bomb = 30,
    /// 地雷. Immobile; defeats every attacker except an engineer.
    Mine = 31,
    /// 工兵. The only rank that defuses mines.
    Engineer = 32,
    /// 排长.
    Lieutenant = 33,
    /// 连长.
    Captain = 34,
    /// 营长.
    Major = 35,
    /// 团长.
    Colonel = 36,
    /// 旅长.
    Brigadier = 37,
    /// 师长.
    MajorGeneral = 38,
    /// 军长.
    General = 39,
    /// 司令.
    CommanderInChief = 40,
}

impl Rank {
    /// Every rank, in increasing strength order.
    pub const ALL: [Rank; 11] = [
        Rank::Bomb,
        Rank::Mine,
        Rank::Engineer,
        Rank::Lieutenant,
        Rank::Captain,
        Rank::Major,
        Rank::Colonel,
        Rank::Brigadier,
        Rank::MajorGeneral,
        Rank::General,
        Rank::CommanderInChief,
    ];

    /// The strength value of this rank, 30 through 40.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Look up a rank by its strength value.
    pub fn from_value(value: u8) -> Option<Self> {
        Rank::ALL.iter().copied().find(|rank| rank.value() == value)
    }

    /// The full two-character name (双字).
    pub fn name(self) -> &'static str {
        match self {
            Rank::Bomb => "炸弹",
            Rank::Mine => "地雷",
            Rank::Engineer => "工兵",
            Rank::Lieutenant => "排长",
            Rank::Captain => "连长",
            Rank::Major => "营长",
            Rank::Colonel => "团长",
            Rank::Brigadier => "旅长",
            Rank::MajorGeneral => "师长",
            Rank::General => "军长",
            Rank::CommanderInChief => "司令",
        }
    }

    /// The abbreviated one-character name (单字).
    pub fn short_name(self) -> &'static str {
        match self {
            Rank::Bomb => "炸",
            Rank::Mine => "雷",
            Rank::Engineer => "兵",
            Rank::Lieutenant => "排",
            Rank::Captain => "连",
            Rank::Major => "营",
            Rank::Colonel => "团",
            Rank::Brigadier => "旅",
            Rank::MajorGeneral => "师",
            Rank::General => "军",
            Rank::CommanderInChief => "司",
        }
    }

    /// Whether pieces of this rank can ever relocate. Mines are placed
    /// once and stay where they are.
    pub fn is_mobile(self) -> bool {
        self != Rank::Mine
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A piece on the board.
///
/// The true rank of a piece is hidden information: it is observable only
/// by the seats in its visibility set, which starts as just the owner and
/// grows through reveal events (typically after combat). Rendering a rank
/// through [`Rank::name`] or [`Rank::short_name`] never affects rules.
#[derive(Debug, Clone)]
pub struct Piece {
    rank: Rank,
    owner: Player,
    /// Seats permitted to observe the true rank. Always contains the
    /// owner.
    observers: BitFlags<Player>,
    position: Position,
}

impl Piece {
    /// Create a piece owned by `owner`, visible only to its owner.
    pub fn new(rank: Rank, owner: Player, position: Position) -> Self {
        Self {
            rank,
            owner,
            observers: BitFlags::from(owner),
            position,
        }
    }

    /// The rank of this piece.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// The seat that owns this piece.
    pub fn owner(&self) -> Player {
        self.owner
    }

    /// The position this piece stands on.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The seats currently permitted to observe the true rank.
    pub fn observers(&self) -> BitFlags<Player> {
        self.observers
    }

    /// Whether `player` may observe this piece's true rank.
    pub fn is_visible_to(&self, player: Player) -> bool {
        self.observers.contains(player)
    }

    /// Permit `player` to observe the true rank.
    pub fn reveal_to(&mut self, player: Player) {
        self.observers.insert(player);
    }

    /// Expose the true rank to every seat.
    pub fn reveal_to_all(&mut self) {
        self.observers = BitFlags::all();
    }

    /// Update the piece's position. Intended for [`Board`] implementations
    /// applying a validated relocation.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Every position this piece may legally move to on `board`.
    pub fn accessible_positions<B: Board>(&self, board: &B) -> HashSet<Position> {
        rules::accessible_positions(board, self)
    }

    /// Whether this piece may legally move to `target` on `board`.
    pub fn can_move_to<B: Board>(&self, board: &B, target: &Position) -> bool {
        rules::is_accessible(board, self, target)
    }

    /// Resolve combat of this piece attacking `defender`.
    pub fn attack(&self, defender: &Piece) -> Result<CombatOutcome, MineCannotAttack> {
        resolve(self.rank, defender.rank)
    }
}
