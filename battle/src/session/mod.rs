//! Turn-based battle sessions

mod battle;
mod roster;
mod turn;

pub use battle::{BattlePhase, BattleSession, MAX_HEALTH};
pub use roster::Roster;
pub use turn::{TurnOutcome, TurnReport, TurnTicket};
