//! Deterministic battle scoring
//!
//! A combatant's score is a fixed weighted sum of its stats, its type
//! matchup, experience, size and (when both sides have chosen one) its move.
//! The quick verdict compares the two scores and explains the result.

mod breakdown;
mod verdict;

pub use breakdown::{MOVE_WEIGHTS, STAT_WEIGHTS, ScoreBreakdown, ScoreWeights};
pub use verdict::{BattleResult, FALLBACK_REASON, pick_winner, quick_verdict, win_margin};
