//! Combat resolution.

use thiserror::Error;

use crate::pieces::Rank;

/// Outcome of combat between an attacking and a defending piece.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CombatOutcome {
    /// The defender is removed and the attacker takes its cell.
    AttackerWins,
    /// The attacker is removed; the defender keeps its cell.
    DefenderWins,
    /// Both pieces are removed.
    MutualDestruction,
}

/// Error returned when a mine is asked to initiate combat. Mines only
/// ever defend.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("a mine cannot initiate combat")]
pub struct MineCannotAttack;

/// Resolve combat between two ranks.
///
/// Equal ranks destroy each other, as does a bomb on either side. Mines
/// stop every attacker except an engineer, which defuses them; an
/// engineer loses to everything else. Between the remaining pairs the
/// higher strength value wins.
pub fn resolve(attacker: Rank, defender: Rank) -> Result<CombatOutcome, MineCannotAttack> {
    if attacker == Rank::Mine {
        return Err(MineCannotAttack);
    }
    if attacker == defender || attacker == Rank::Bomb || defender == Rank::Bomb {
        return Ok(CombatOutcome::MutualDestruction);
    }
    Ok(match (attacker, defender) {
        (Rank::Engineer, Rank::Mine) => CombatOutcome::AttackerWins,
        (Rank::Engineer, _) => CombatOutcome::DefenderWins,
        (_, Rank::Mine) => CombatOutcome::DefenderWins,
        _ if attacker.value() > defender.value() => CombatOutcome::AttackerWins,
        _ => CombatOutcome::DefenderWins,
    })
}
