//! Errors raised by the battle engine

use thiserror::Error;

use crate::types::Side;

/// A catalog record that cannot become a domain value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    #[error("Unknown type tag: {0}")]
    UnknownType(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// A session operation that was rejected without changing any state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No combatant on side {0}")]
    MissingCombatant(Side),

    #[error("No move selected for side {0}")]
    MissingMove(Side),

    #[error("Move {name} was already used by side {side}")]
    MoveAlreadyUsed { side: Side, name: String },

    #[error("Battle has not started")]
    NotStarted,

    #[error("Battle is over")]
    BattleOver,

    #[error("Turn {0} is still waiting for acknowledgement")]
    TurnPending(u32),

    #[error("No turn is waiting for acknowledgement")]
    NoPendingTurn,

    #[error("Acknowledgement does not match the pending turn")]
    StaleTicket,
}
