//! BattleSession - turn-based battle state

use indexmap::IndexSet;

use super::roster::Roster;
use super::turn::TurnReport;
use crate::error::SessionError;
use crate::scoring::BattleResult;
use crate::types::{Combatant, Move, Side};

/// Health every combatant starts a battle with
pub const MAX_HEALTH: u32 = 500;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattlePhase {
    /// At least one combatant is missing
    Idle,
    /// Both combatants loaded, waiting for a move on one or both sides
    AwaitingMoves,
    /// Both moves chosen, battle not yet started
    ReadyToStart,
    /// Both moves chosen for the next turn of a battle in progress
    ReadyForTurn,
    /// A turn's damage is computed and waiting for acknowledgement
    TurnResolving,
    /// One side has been reduced to zero health
    Over,
}

/// A turn-based battle between two combatants
///
/// Health, move history and selections are all in-memory and are discarded
/// whenever either combatant changes.
#[derive(Debug, Clone)]
pub struct BattleSession {
    pub(crate) combatants: [Option<Combatant>; 2],

    pub(crate) health: [u32; 2],

    /// Names of moves each side has used, in order of use
    pub(crate) used_moves: [IndexSet<String>; 2],

    /// Move chosen for the next turn (cleared after each turn)
    pub(crate) selected: [Option<Move>; 2],

    pub(crate) started: bool,

    pub(crate) over: bool,

    /// Completed turns
    pub(crate) turn: u32,

    /// Bumped on every reset so acknowledgements from before it are refused
    pub(crate) epoch: u64,

    /// Turn computed but not yet applied
    pub(crate) pending: Option<TurnReport>,

    pub(crate) result: Option<BattleResult>,
}

impl BattleSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self {
            combatants: [None, None],
            health: [MAX_HEALTH; 2],
            used_moves: [IndexSet::new(), IndexSet::new()],
            selected: [None, None],
            started: false,
            over: false,
            turn: 0,
            epoch: 0,
            pending: None,
            result: None,
        }
    }

    /// Create a session with both combatants loaded
    pub fn with_combatants(a: Combatant, b: Combatant) -> Self {
        let mut session = Self::new();
        session.set_combatant(Side::A, Some(a));
        session.set_combatant(Side::B, Some(b));
        session
    }

    /// Replace (or remove) the combatant on a side
    ///
    /// A different identity resets the whole session, including any turn
    /// waiting for acknowledgement. Returns whether a reset happened.
    pub fn set_combatant(&mut self, side: Side, combatant: Option<Combatant>) -> bool {
        let slot = &mut self.combatants[side.index()];
        let same_identity = match (slot.as_ref(), combatant.as_ref()) {
            (Some(current), Some(new)) => current.name == new.name,
            (None, None) => true,
            _ => false,
        };

        *slot = combatant;
        if !same_identity {
            self.reset();
        }
        !same_identity
    }

    /// Discard all battle progress, keeping the combatants
    pub fn reset(&mut self) {
        self.health = [MAX_HEALTH; 2];
        for used in &mut self.used_moves {
            used.clear();
        }
        self.selected = [None, None];
        self.started = false;
        self.over = false;
        self.turn = 0;
        self.pending = None;
        self.result = None;
        self.epoch += 1;
    }

    /// Choose the move a side will use next turn
    pub fn select_move(&mut self, side: Side, mv: Move) -> Result<(), SessionError> {
        if self.combatants[side.index()].is_none() {
            return Err(SessionError::MissingCombatant(side));
        }
        if self.over {
            return Err(SessionError::BattleOver);
        }
        if let Some(pending) = &self.pending {
            return Err(SessionError::TurnPending(pending.ticket.turn));
        }
        if self.used_moves[side.index()].contains(&mv.name) {
            return Err(SessionError::MoveAlreadyUsed {
                side,
                name: mv.name,
            });
        }

        self.selected[side.index()] = Some(mv);
        Ok(())
    }

    /// Moves from a side's roster it may still select, strongest first
    pub fn eligible_moves<'r>(&self, side: Side, roster: &'r Roster) -> Vec<&'r Move> {
        roster.eligible(&self.used_moves[side.index()])
    }

    /// Current phase, derived from the session state
    pub fn phase(&self) -> BattlePhase {
        if self.over {
            BattlePhase::Over
        } else if self.pending.is_some() {
            BattlePhase::TurnResolving
        } else if self.combatants.iter().any(Option::is_none) {
            BattlePhase::Idle
        } else if self.selected.iter().all(Option::is_some) {
            if self.started {
                BattlePhase::ReadyForTurn
            } else {
                BattlePhase::ReadyToStart
            }
        } else {
            BattlePhase::AwaitingMoves
        }
    }

    /// Get the combatant on a side
    pub fn combatant(&self, side: Side) -> Option<&Combatant> {
        self.combatants[side.index()].as_ref()
    }

    /// Remaining health of a side
    pub fn health(&self, side: Side) -> u32 {
        self.health[side.index()]
    }

    /// Move names a side has used this battle, in order of use
    pub fn used_moves(&self, side: Side) -> &IndexSet<String> {
        &self.used_moves[side.index()]
    }

    /// Move a side has chosen for the next turn
    pub fn selected_move(&self, side: Side) -> Option<&Move> {
        self.selected[side.index()].as_ref()
    }

    /// Turn waiting for acknowledgement, if any
    pub fn pending_turn(&self) -> Option<&TurnReport> {
        self.pending.as_ref()
    }

    /// Number of completed turns
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Final result, once the battle is over
    pub fn result(&self) -> Option<&BattleResult> {
        self.result.as_ref()
    }
}

impl Default for BattleSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseStats, Type};

    fn pikachu() -> Combatant {
        Combatant::new("pikachu", &[Type::Electric], BaseStats::new(35, 55, 40, 50, 50, 90))
    }

    fn squirtle() -> Combatant {
        Combatant::new("squirtle", &[Type::Water], BaseStats::new(44, 48, 65, 50, 64, 43))
    }

    #[test]
    fn test_new_session() {
        let session = BattleSession::new();
        assert_eq!(session.phase(), BattlePhase::Idle);
        assert_eq!(session.health(Side::A), MAX_HEALTH);
        assert_eq!(session.health(Side::B), MAX_HEALTH);
        assert!(!session.is_started());
        assert!(session.result().is_none());
    }

    #[test]
    fn test_phase_progression() {
        let mut session = BattleSession::new();
        session.set_combatant(Side::A, Some(pikachu()));
        assert_eq!(session.phase(), BattlePhase::Idle);

        session.set_combatant(Side::B, Some(squirtle()));
        assert_eq!(session.phase(), BattlePhase::AwaitingMoves);

        session
            .select_move(Side::A, Move::new("Thunder Shock", Type::Electric, 40))
            .unwrap();
        assert_eq!(session.phase(), BattlePhase::AwaitingMoves);

        session
            .select_move(Side::B, Move::new("Water Gun", Type::Water, 40))
            .unwrap();
        assert_eq!(session.phase(), BattlePhase::ReadyToStart);
    }

    #[test]
    fn test_select_move_without_combatant() {
        let mut session = BattleSession::new();
        let result = session.select_move(Side::B, Move::new("Tackle", Type::Normal, 40));

        assert_eq!(result, Err(SessionError::MissingCombatant(Side::B)));
        assert!(session.selected_move(Side::B).is_none());
    }

    #[test]
    fn test_select_used_move_rejected() {
        let mut session = BattleSession::with_combatants(pikachu(), squirtle());
        session.used_moves[0].insert("Thunder Shock".to_string());

        let result = session.select_move(Side::A, Move::new("Thunder Shock", Type::Electric, 40));
        assert!(matches!(result, Err(SessionError::MoveAlreadyUsed { side: Side::A, .. })));
        assert!(session.selected_move(Side::A).is_none());
    }

    #[test]
    fn test_same_identity_does_not_reset() {
        let mut session = BattleSession::with_combatants(pikachu(), squirtle());
        session
            .select_move(Side::A, Move::new("Thunder Shock", Type::Electric, 40))
            .unwrap();

        assert!(!session.set_combatant(Side::A, Some(pikachu())));
        assert!(session.selected_move(Side::A).is_some());
    }

    #[test]
    fn test_identity_change_resets_everything() {
        let mut session = BattleSession::with_combatants(pikachu(), squirtle());
        session.health = [120, 40];
        session.started = true;
        session.used_moves[1].insert("Water Gun".to_string());
        session
            .select_move(Side::A, Move::new("Thunder Shock", Type::Electric, 40))
            .unwrap();
        let epoch = session.epoch;

        let mut raichu = pikachu();
        raichu.name = "raichu".to_string();
        assert!(session.set_combatant(Side::A, Some(raichu)));

        assert_eq!(session.health(Side::A), MAX_HEALTH);
        assert_eq!(session.health(Side::B), MAX_HEALTH);
        assert!(session.used_moves(Side::B).is_empty());
        assert!(session.selected_move(Side::A).is_none());
        assert!(!session.is_started());
        assert!(session.epoch > epoch);
        assert_eq!(session.combatant(Side::A).unwrap().name, "raichu");
    }

    #[test]
    fn test_removing_combatant_goes_idle() {
        let mut session = BattleSession::with_combatants(pikachu(), squirtle());
        assert!(session.set_combatant(Side::B, None));
        assert_eq!(session.phase(), BattlePhase::Idle);
    }

    #[test]
    fn test_eligible_moves_follow_used_set() {
        let mut session = BattleSession::with_combatants(pikachu(), squirtle());
        let roster = Roster::new(vec![
            Move::new("Thunder Shock", Type::Electric, 40),
            Move::new("Thunderbolt", Type::Electric, 90),
        ]);
        session.used_moves[0].insert("Thunderbolt".to_string());

        let eligible = session.eligible_moves(Side::A, &roster);
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].name, "Thunder Shock");

        // Side B has used nothing
        assert_eq!(session.eligible_moves(Side::B, &roster).len(), 2);
    }
}
