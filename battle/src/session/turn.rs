//! Turn execution
//!
//! A turn is a two-phase commit: [`BattleSession::execute_turn`] computes the
//! damage and parks it in the session, and nothing changes until
//! [`BattleSession::acknowledge_turn`] is called with the matching ticket.

use super::battle::{BattleSession, MAX_HEALTH};
use crate::error::SessionError;
use crate::query::type_matchup;
use crate::scoring::{BattleResult, quick_verdict, win_margin};
use crate::types::{Move, Side};

/// Identifies one pending turn of one session lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnTicket {
    pub epoch: u64,
    /// 1-based number of the turn
    pub turn: u32,
}

/// A turn whose damage is computed but not yet applied
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub ticket: TurnTicket,

    /// Moves used by side A and side B
    pub moves: [Move; 2],

    /// Damage each side is about to take (indexed by the receiving side)
    pub damage: [u32; 2],

    /// Health before the damage lands
    pub health_before: [u32; 2],
}

impl TurnReport {
    /// Move used by a side
    pub fn move_of(&self, side: Side) -> &Move {
        &self.moves[side.index()]
    }

    /// Damage a side is about to take
    pub fn damage_to(&self, side: Side) -> u32 {
        self.damage[side.index()]
    }
}

/// What an acknowledged turn did
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub turn: u32,

    /// Damage taken by side A and side B
    pub damage: [u32; 2],

    /// Health after the turn
    pub health: [u32; 2],

    /// Set when this turn ended the battle
    pub result: Option<BattleResult>,
}

impl BattleSession {
    /// Start (or restart) the battle and execute its first turn
    ///
    /// Health returns to the maximum and move history is cleared. Both
    /// combatants and both opening moves must be in place.
    pub fn start_battle(&mut self) -> Result<TurnReport, SessionError> {
        if let Some(pending) = &self.pending {
            return Err(SessionError::TurnPending(pending.ticket.turn));
        }
        if self.over {
            return Err(SessionError::BattleOver);
        }
        self.check_ready()?;

        self.health = [MAX_HEALTH; 2];
        for used in &mut self.used_moves {
            used.clear();
        }
        self.turn = 0;
        self.result = None;
        self.started = true;

        self.execute_turn()
    }

    /// Compute the next turn from the selected moves
    ///
    /// Each side takes damage equal to the power of the opposing move. The
    /// damage is captured in the returned report and held by the session
    /// until the turn is acknowledged; only one turn can be held at a time.
    pub fn execute_turn(&mut self) -> Result<TurnReport, SessionError> {
        if !self.started {
            return Err(SessionError::NotStarted);
        }
        if self.over {
            return Err(SessionError::BattleOver);
        }
        if let Some(pending) = &self.pending {
            return Err(SessionError::TurnPending(pending.ticket.turn));
        }
        let [move_a, move_b] = self.check_ready()?;

        let report = TurnReport {
            ticket: TurnTicket {
                epoch: self.epoch,
                turn: self.turn + 1,
            },
            damage: [move_b.power, move_a.power],
            moves: [move_a, move_b],
            health_before: self.health,
        };
        self.pending = Some(report.clone());
        Ok(report)
    }

    /// Apply the pending turn
    ///
    /// Tickets from before a reset, or for another turn, are refused and
    /// leave the session untouched.
    pub fn acknowledge_turn(&mut self, ticket: TurnTicket) -> Result<TurnOutcome, SessionError> {
        let report = match self.pending.take() {
            None => return Err(SessionError::NoPendingTurn),
            Some(pending) if pending.ticket != ticket => {
                self.pending = Some(pending);
                return Err(SessionError::StaleTicket);
            }
            Some(pending) => pending,
        };

        for side in Side::BOTH {
            let i = side.index();
            self.health[i] = self.health[i].saturating_sub(report.damage[i]);
            self.used_moves[i].insert(report.moves[i].name.clone());
        }
        self.selected = [None, None];
        self.turn = report.ticket.turn;

        let result = self.knockout_result(&report);
        if let Some(result) = &result {
            self.over = true;
            self.result = Some(result.clone());
        }

        Ok(TurnOutcome {
            turn: self.turn,
            damage: report.damage,
            health: self.health,
            result,
        })
    }

    /// Both combatants present and both moves selected
    fn check_ready(&self) -> Result<[Move; 2], SessionError> {
        for side in Side::BOTH {
            if self.combatants[side.index()].is_none() {
                return Err(SessionError::MissingCombatant(side));
            }
        }
        match (&self.selected[0], &self.selected[1]) {
            (Some(a), Some(b)) => Ok([a.clone(), b.clone()]),
            (None, _) => Err(SessionError::MissingMove(Side::A)),
            (_, None) => Err(SessionError::MissingMove(Side::B)),
        }
    }

    fn knockout_result(&self, report: &TurnReport) -> Option<BattleResult> {
        let (Some(a), Some(b)) = (&self.combatants[0], &self.combatants[1]) else {
            return None;
        };
        let down = [self.health[0] == 0, self.health[1] == 0];

        match down {
            [false, false] => None,
            [true, true] => {
                let mut verdict =
                    quick_verdict(a, b, Some((&report.moves[0], &report.moves[1])));
                verdict.reason = format!("Double knockout, {} wins on battle score", verdict.winner);
                Some(verdict)
            }
            [a_down, _] => {
                let (winner_side, winner, loser) = if a_down {
                    (Side::B, b, a)
                } else {
                    (Side::A, a, b)
                };
                let score1 = self.health[0] as f64;
                let score2 = self.health[1] as f64;

                Some(BattleResult {
                    winner: winner.name.clone(),
                    winner_side,
                    reason: format!("{} fainted", loser.name),
                    stats1: a.stats.total(),
                    stats2: b.stats.total(),
                    score1,
                    score2,
                    win_percentage: win_margin(score1, score2),
                    type_info: type_matchup(&a.types, &b.types),
                    breakdown: None,
                })
            }
        }
    }
}
