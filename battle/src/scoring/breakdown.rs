//! Weighted battle score of a single combatant

use crate::query::move_effectiveness;
use crate::types::{Combatant, Move, Type};

/// Weight of each scoring term
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub base_stats: f64,
    pub type_weighted: f64,
    pub experience: f64,
    pub speed: f64,
    pub offense: f64,
    pub bulk: f64,
    pub size: f64,
    pub move_power: f64,
}

/// Weights used when no move is known for either side
pub const STAT_WEIGHTS: ScoreWeights = ScoreWeights {
    base_stats: 0.4,
    type_weighted: 0.3,
    experience: 0.1,
    speed: 0.12,
    offense: 0.05,
    bulk: 0.05,
    size: 0.005,
    move_power: 0.0,
};

/// Weights used when both sides have a chosen move
pub const MOVE_WEIGHTS: ScoreWeights = ScoreWeights {
    base_stats: 0.3,
    type_weighted: 0.2,
    experience: 0.08,
    speed: 0.1,
    offense: 0.05,
    bulk: 0.05,
    size: 0.005,
    move_power: 0.25,
};

/// Every weighted term of a combatant's score
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    pub base_stats: f64,
    pub type_weighted: f64,
    pub experience: f64,
    pub speed: f64,
    pub offense: f64,
    pub bulk: f64,
    pub size: f64,
    /// Always 0 without move context
    pub move_power: f64,
    /// Type multiplier of the chosen move against the opponent (1 without one)
    pub move_effectiveness: f64,
}

impl ScoreBreakdown {
    /// Score a combatant
    ///
    /// `multiplier` is the combatant's aggregate type multiplier against the
    /// opponent. With `chosen` set, the move term is added and the
    /// move-context weights replace the stat-only ones.
    pub fn compute(
        combatant: &Combatant,
        multiplier: f64,
        chosen: Option<(&Move, &[Type])>,
    ) -> Self {
        let weights = if chosen.is_some() {
            &MOVE_WEIGHTS
        } else {
            &STAT_WEIGHTS
        };
        let stats = &combatant.stats;
        let total = stats.total() as f64;

        let (move_power, move_eff) = match chosen {
            Some((mv, opponent_types)) => {
                let eff = move_effectiveness(mv.move_type, opponent_types);
                (
                    mv.power as f64 * mv.accuracy_fraction() * eff * weights.move_power,
                    eff,
                )
            }
            None => (0.0, 1.0),
        };

        Self {
            base_stats: total * weights.base_stats,
            type_weighted: total * multiplier * weights.type_weighted,
            experience: combatant.base_experience as f64 * weights.experience,
            speed: stats.speed as f64 * weights.speed,
            offense: stats.offense() as f64 * weights.offense,
            bulk: stats.bulk() as f64 * weights.bulk,
            size: combatant.size_factor() * weights.size,
            move_power,
            move_effectiveness: move_eff,
        }
    }

    /// Sum of all terms
    pub fn total(&self) -> f64 {
        self.base_stats
            + self.type_weighted
            + self.experience
            + self.speed
            + self.offense
            + self.bulk
            + self.size
            + self.move_power
    }
}
