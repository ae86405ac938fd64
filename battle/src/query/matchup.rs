//! Type matchup resolution
//!
//! Everything here is a pure function of the static type chart.

use crate::types::Type;

/// Aggregate type matchup between two combatants
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectivenessResult {
    /// Product of side A's types against side B's types
    pub multiplier1: f64,

    /// Product of side B's types against side A's types
    pub multiplier2: f64,

    /// First super-effective pair for side A, e.g. "fire > grass"
    pub advantage1: Option<String>,

    /// First super-effective pair for side B
    pub advantage2: Option<String>,
}

impl EffectivenessResult {
    /// Neither side has any type interaction
    pub fn neutral() -> Self {
        Self {
            multiplier1: 1.0,
            multiplier2: 1.0,
            advantage1: None,
            advantage2: None,
        }
    }
}

/// Resolve the type matchup of side A's types against side B's, and back
///
/// Each multiplier is the product of every cross-type chart entry, so a
/// single immunity zeroes the whole product.
pub fn type_matchup(a_types: &[Type], b_types: &[Type]) -> EffectivenessResult {
    let (multiplier1, advantage1) = attack_profile(a_types, b_types);
    let (multiplier2, advantage2) = attack_profile(b_types, a_types);

    EffectivenessResult {
        multiplier1,
        multiplier2,
        advantage1,
        advantage2,
    }
}

/// Multiplier of a single move's type against the defending types
pub fn move_effectiveness(move_type: Type, defender_types: &[Type]) -> f64 {
    f64::from(move_type.effectiveness_multi(defender_types))
}

fn attack_profile(attackers: &[Type], defenders: &[Type]) -> (f64, Option<String>) {
    let mut multiplier = 1.0_f64;
    let mut advantage = None;

    for attacker in attackers {
        for defender in defenders {
            let value = f64::from(attacker.effectiveness(*defender));
            if value != 1.0 {
                multiplier *= value;
            }
            if advantage.is_none() && value > 1.0 {
                advantage = Some(format!("{} > {}", attacker.api_name(), defender.api_name()));
            }
        }
    }

    (multiplier, advantage)
}
