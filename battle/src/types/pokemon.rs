//! Combatant types

use duel_protocol::{MoveEntry, PokemonRecord};

use super::pokemon_type::Type;
use super::stats::BaseStats;

/// Only this many of a combatant's move references are ever resolved
pub const MAX_ROSTER_MOVES: usize = 20;

/// Reference to a move detail in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRef {
    /// Catalog name (e.g., "thunder-punch")
    pub name: String,

    /// Where the move detail can be fetched
    pub url: String,
}

impl MoveRef {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    fn from_protocol(entry: &MoveEntry) -> Self {
        Self::new(&entry.move_ref.name, &entry.move_ref.url)
    }
}

/// One of the two creatures in a battle (doesn't change during battle)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    /// Catalog name, also the identity of the combatant within a session
    pub name: String,

    /// One or two types, in slot order
    pub types: Vec<Type>,

    pub stats: BaseStats,

    pub base_experience: u32,

    /// Weight in hectograms
    pub weight: u32,

    /// Height in decimetres
    pub height: u32,

    /// Move references in catalog order
    pub moves: Vec<MoveRef>,
}

impl Combatant {
    /// Create a combatant with no experience, size or moves
    pub fn new(name: impl Into<String>, types: &[Type], stats: BaseStats) -> Self {
        Self {
            name: name.into(),
            types: types.to_vec(),
            stats,
            base_experience: 0,
            weight: 0,
            height: 0,
            moves: Vec::new(),
        }
    }

    /// Build from a catalog record
    ///
    /// Missing numbers become 0 and type tags the chart does not know are
    /// dropped, so nothing downstream has to deal with gaps.
    pub fn from_protocol(record: &PokemonRecord) -> Self {
        Self {
            name: record.name.clone(),
            types: record
                .type_names()
                .into_iter()
                .filter_map(Type::from_protocol)
                .collect(),
            stats: BaseStats::from_protocol(record),
            base_experience: record.base_experience.unwrap_or(0),
            weight: record.weight.unwrap_or(0),
            height: record.height.unwrap_or(0),
            moves: record.moves.iter().map(MoveRef::from_protocol).collect(),
        }
    }

    /// The move references worth resolving (the first [`MAX_ROSTER_MOVES`])
    pub fn roster_refs(&self) -> &[MoveRef] {
        let end = self.moves.len().min(MAX_ROSTER_MOVES);
        &self.moves[..end]
    }

    /// `(weight × height) / 100`, used by battle scoring
    pub fn size_factor(&self) -> f64 {
        (self.weight as f64 * self.height as f64) / 100.0
    }
}
