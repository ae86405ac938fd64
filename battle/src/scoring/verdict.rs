//! Quick verdict: who would win, and why

use std::cmp::Ordering;

use super::breakdown::ScoreBreakdown;
use crate::query::{EffectivenessResult, type_matchup};
use crate::types::{Combatant, Move, Side};

/// Reason given when no individual factor favors the winner
pub const FALLBACK_REASON: &str = "Higher overall battle score";

/// Outcome of a battle, from either the quick verdict or a finished session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    /// Winner's name
    pub winner: String,

    pub winner_side: Side,

    /// Human-readable explanation
    pub reason: String,

    /// Base stat totals of side A and side B
    pub stats1: u32,
    pub stats2: u32,

    /// Raw scores of side A and side B
    pub score1: f64,
    pub score2: f64,

    /// Win margin in percent, one decimal
    pub win_percentage: f64,

    pub type_info: EffectivenessResult,

    /// Per-side score terms (A, B) when the result came from scoring
    pub breakdown: Option<[ScoreBreakdown; 2]>,
}

impl BattleResult {
    /// Loser's side
    pub fn loser_side(&self) -> Side {
        self.winner_side.other()
    }

    /// Check whether the given side won
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner_side == side
    }
}

/// Decide a battle from stats, types and (optionally) one chosen move per side
///
/// Move context is only used when both sides have a move; otherwise the
/// stat-only weighting applies to both.
pub fn quick_verdict(a: &Combatant, b: &Combatant, moves: Option<(&Move, &Move)>) -> BattleResult {
    let type_info = type_matchup(&a.types, &b.types);

    let (chosen_a, chosen_b) = match moves {
        Some((move_a, move_b)) => (
            Some((move_a, b.types.as_slice())),
            Some((move_b, a.types.as_slice())),
        ),
        None => (None, None),
    };
    let breakdown_a = ScoreBreakdown::compute(a, type_info.multiplier1, chosen_a);
    let breakdown_b = ScoreBreakdown::compute(b, type_info.multiplier2, chosen_b);
    let score1 = breakdown_a.total();
    let score2 = breakdown_b.total();

    let winner_side = pick_winner(a, b, score1, score2);
    let reason = {
        let sides = [
            Contender {
                combatant: a,
                chosen: moves.map(|(m, _)| m),
                breakdown: &breakdown_a,
                multiplier: type_info.multiplier1,
                advantage: type_info.advantage1.as_deref(),
            },
            Contender {
                combatant: b,
                chosen: moves.map(|(_, m)| m),
                breakdown: &breakdown_b,
                multiplier: type_info.multiplier2,
                advantage: type_info.advantage2.as_deref(),
            },
        ];
        explain(
            &sides[winner_side.index()],
            &sides[winner_side.other().index()],
        )
    };

    let winner = match winner_side {
        Side::A => a.name.clone(),
        Side::B => b.name.clone(),
    };

    BattleResult {
        winner,
        winner_side,
        reason,
        stats1: a.stats.total(),
        stats2: b.stats.total(),
        score1,
        score2,
        win_percentage: win_margin(score1, score2),
        type_info,
        breakdown: Some([breakdown_a, breakdown_b]),
    }
}

/// Side with the strictly higher score
///
/// Equal scores go to the faster combatant, then to the name that sorts
/// first (case-insensitive), then to side A.
pub fn pick_winner(a: &Combatant, b: &Combatant, score_a: f64, score_b: f64) -> Side {
    let ordering = score_a
        .partial_cmp(&score_b)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.stats.speed.cmp(&b.stats.speed))
        .then_with(|| {
            b.name
                .to_lowercase()
                .cmp(&a.name.to_lowercase())
                .then_with(|| b.name.cmp(&a.name))
        });

    match ordering {
        Ordering::Less => Side::B,
        Ordering::Equal | Ordering::Greater => Side::A,
    }
}

/// `(max − min) / max × 100`, rounded to one decimal; 0 when `max ≤ 0`
pub fn win_margin(score1: f64, score2: f64) -> f64 {
    let max = score1.max(score2);
    let min = score1.min(score2);
    if max <= 0.0 {
        return 0.0;
    }
    let margin = ((max - min) / max * 100.0).clamp(0.0, 100.0);
    (margin * 10.0).round() / 10.0
}

struct Contender<'a> {
    combatant: &'a Combatant,
    chosen: Option<&'a Move>,
    breakdown: &'a ScoreBreakdown,
    multiplier: f64,
    advantage: Option<&'a str>,
}

fn explain(winner: &Contender<'_>, loser: &Contender<'_>) -> String {
    let w = &winner.combatant.stats;
    let l = &loser.combatant.stats;
    let mut factors: Vec<String> = Vec::new();

    if w.total() > l.total() {
        factors.push("higher total stats".to_string());
    }
    if let (Some(wm), Some(lm)) = (winner.chosen, loser.chosen) {
        if wm.power > lm.power {
            factors.push(format!("stronger move ({})", wm.name));
        }
        if winner.breakdown.move_effectiveness > loser.breakdown.move_effectiveness {
            factors.push("more effective move type".to_string());
        }
    }
    if winner.multiplier > loser.multiplier {
        match winner.advantage {
            Some(advantage) => factors.push(format!("type advantage ({})", advantage)),
            None => factors.push("better type matchup".to_string()),
        }
    }
    if w.speed > l.speed {
        factors.push("higher speed".to_string());
    }
    if w.offense() > l.offense() {
        factors.push("greater offensive power".to_string());
    }

    if factors.is_empty() {
        return FALLBACK_REASON.to_string();
    }
    capitalize(&factors.join(", "))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseStats, Type};

    fn fire_side() -> Combatant {
        // total 300, speed 80
        Combatant::new("flareon", &[Type::Fire], BaseStats::new(50, 50, 50, 50, 20, 80))
    }

    fn grass_side() -> Combatant {
        // total 280, speed 70
        Combatant::new("leafeon", &[Type::Grass], BaseStats::new(50, 50, 50, 50, 10, 70))
    }

    #[test]
    fn test_fire_beats_grass_without_moves() {
        let result = quick_verdict(&fire_side(), &grass_side(), None);

        assert_eq!(result.winner, "flareon");
        assert_eq!(result.winner_side, Side::A);
        assert_eq!(result.loser_side(), Side::B);
        assert!(result.is_winner(Side::A));
        assert!(!result.is_winner(Side::B));
        assert_eq!(result.stats1, 300);
        assert_eq!(result.stats2, 280);
        assert_eq!(result.type_info.multiplier1, 2.0);
        assert_eq!(result.type_info.advantage1.as_deref(), Some("fire > grass"));
        assert_eq!(result.type_info.multiplier2, 0.5);
        assert_eq!(result.type_info.advantage2, None);

        // 120 + 180 + 9.6 + 5 + 3.5 against 112 + 42 + 8.4 + 5 + 3
        assert!((result.score1 - 318.1).abs() < 1e-9);
        assert!((result.score2 - 170.4).abs() < 1e-9);
        assert_eq!(result.win_percentage, 46.4);
        assert_eq!(
            result.reason,
            "Higher total stats, type advantage (fire > grass), higher speed"
        );
    }

    #[test]
    fn test_breakdown_present() {
        let result = quick_verdict(&fire_side(), &grass_side(), None);
        let [a, b] = result.breakdown.unwrap();

        assert!((a.total() - result.score1).abs() < 1e-9);
        assert!((b.total() - result.score2).abs() < 1e-9);
    }

    #[test]
    fn test_move_context_can_flip_result() {
        let ember = Move::new("Ember", Type::Fire, 40);
        let mut hydro = Move::new("Hydro Pump", Type::Water, 110);
        hydro.accuracy = 80;

        let mut water = grass_side();
        water.name = "vaporeon".to_string();
        water.types = vec![Type::Water];

        let result = quick_verdict(&fire_side(), &water, Some((&ember, &hydro)));

        assert_eq!(result.winner_side, Side::B);
        assert!(result.score2 >= result.score1);
        assert_eq!(result.type_info.advantage2.as_deref(), Some("water > fire"));
        assert!(result.reason.starts_with("Stronger move (Hydro Pump), more effective move type"));
        assert!(result.reason.contains("type advantage (water > fire)"));
    }

    #[test]
    fn test_deterministic() {
        let first = quick_verdict(&fire_side(), &grass_side(), None);
        let second = quick_verdict(&fire_side(), &grass_side(), None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_exact_tie_goes_to_name_order() {
        let stats = BaseStats::new(60, 60, 60, 60, 60, 60);
        let eevee = Combatant::new("eevee", &[Type::Normal], stats);
        let abra = Combatant::new("Abra", &[Type::Normal], stats);

        let result = quick_verdict(&eevee, &abra, None);
        assert_eq!(result.winner, "Abra");
        assert_eq!(result.win_percentage, 0.0);
        assert_eq!(result.reason, FALLBACK_REASON);
    }

    #[test]
    fn test_pick_winner_tie_breaks() {
        let slow = Combatant::new("zubat", &[], BaseStats::new(0, 0, 0, 0, 0, 10));
        let fast = Combatant::new("zubat", &[], BaseStats::new(0, 0, 0, 0, 0, 20));

        assert_eq!(pick_winner(&slow, &fast, 10.0, 10.0), Side::B);
        assert_eq!(pick_winner(&fast, &slow, 10.0, 10.0), Side::A);
        // Identical in every way: side A
        assert_eq!(pick_winner(&slow, &slow, 10.0, 10.0), Side::A);
        // Score always comes first
        assert_eq!(pick_winner(&fast, &slow, 9.0, 10.0), Side::B);
    }

    #[test]
    fn test_win_margin() {
        assert_eq!(win_margin(200.0, 100.0), 50.0);
        assert_eq!(win_margin(100.0, 200.0), 50.0);
        assert_eq!(win_margin(3.0, 1.0), 66.7);
        assert_eq!(win_margin(0.0, 0.0), 0.0);
        assert_eq!(win_margin(500.0, 0.0), 100.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_result_serializes() {
        let result = quick_verdict(&fire_side(), &grass_side(), None);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["winner"], "flareon");
        assert_eq!(json["winner_side"], "A");
        assert_eq!(json["stats1"], 300);
        assert_eq!(json["type_info"]["advantage1"], "fire > grass");
        assert!(json["type_info"]["advantage2"].is_null());
    }

    #[test]
    fn test_winner_score_not_below_loser() {
        let pairs = [
            (fire_side(), grass_side()),
            (grass_side(), fire_side()),
        ];
        for (a, b) in pairs.iter() {
            let result = quick_verdict(a, b, None);
            let (winner, loser) = match result.winner_side {
                Side::A => (result.score1, result.score2),
                Side::B => (result.score2, result.score1),
            };
            assert!(winner >= loser);
            assert!((0.0..=100.0).contains(&result.win_percentage));
        }
    }
}
