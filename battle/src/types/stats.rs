//! Base statistics

use duel_protocol::PokemonRecord;

/// The six base stats of a combatant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    /// Create stats from explicit values
    pub fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        special_attack: u32,
        special_defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// Read stats from a catalog record; a stat that is not listed is 0
    pub fn from_protocol(record: &PokemonRecord) -> Self {
        let stat = |name: &str| record.stat(name).unwrap_or(0);
        Self {
            hp: stat("hp"),
            attack: stat("attack"),
            defense: stat("defense"),
            special_attack: stat("special-attack"),
            special_defense: stat("special-defense"),
            speed: stat("speed"),
        }
    }

    /// Sum of all six stats, saturating at `u32::MAX`
    pub fn total(&self) -> u32 {
        [
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
        .into_iter()
        .fold(self.hp, u32::saturating_add)
    }

    /// Attack + Special Attack
    pub fn offense(&self) -> u32 {
        self.attack.saturating_add(self.special_attack)
    }

    /// Defense + Special Defense
    pub fn bulk(&self) -> u32 {
        self.defense.saturating_add(self.special_defense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_protocol::parse_pokemon;

    #[test]
    fn test_totals() {
        let stats = BaseStats::new(39, 52, 43, 60, 50, 65);
        assert_eq!(stats.total(), 309);
        assert_eq!(stats.offense(), 112);
        assert_eq!(stats.bulk(), 93);
    }

    #[test]
    fn test_missing_stats_default_to_zero() {
        let record = parse_pokemon(
            r#"{
                "name": "partial",
                "stats": [
                    { "base_stat": 80, "stat": { "name": "speed" } },
                    { "base_stat": 45, "stat": { "name": "hp" } }
                ]
            }"#,
        )
        .unwrap();

        let stats = BaseStats::from_protocol(&record);
        assert_eq!(stats.speed, 80);
        assert_eq!(stats.hp, 45);
        assert_eq!(stats.attack, 0);
        assert_eq!(stats.special_defense, 0);
        assert_eq!(stats.total(), 125);
    }

    #[test]
    fn test_oversized_stats_saturate() {
        let stats = BaseStats::new(u32::MAX, u32::MAX, 10, u32::MAX, 20, 1);

        assert_eq!(stats.total(), u32::MAX);
        assert_eq!(stats.offense(), u32::MAX);
        assert_eq!(stats.bulk(), 30);
    }
}
