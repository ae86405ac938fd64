//! Type matchup queries
//!
//! Aggregate matchups between combatants and single-move effectiveness.

mod matchup;

pub use matchup::{EffectivenessResult, move_effectiveness, type_matchup};
