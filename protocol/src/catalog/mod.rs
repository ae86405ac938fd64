//! Catalog wire records
//!
//! Creature and move documents as served by a PokeAPI-compatible catalog.
//! Every field the battle engine does not strictly need is optional or
//! defaulted here; turning a record into a domain value (and filling the
//! remaining gaps) happens in `duel-battle`.


use serde::Deserialize;

use crate::ParseError;
use anyhow::Result;

/// `{ "name": ..., "url": ... }` reference to another catalog resource
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One entry of a creature's `stats` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatEntry {
    #[serde(default)]
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

/// One entry of a creature's `types` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// One entry of a creature's `moves` array
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
}

/// `GET /pokemon/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub weight: Option<u32>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
}

impl PokemonRecord {
    /// Base value of a named stat (`"special-attack"`, ...), if listed
    pub fn stat(&self, name: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|entry| entry.stat.name == name)
            .map(|entry| entry.base_stat)
    }

    /// Type names ordered by slot
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|slot| slot.slot);
        slots.iter().map(|slot| slot.type_ref.name.as_str()).collect()
    }
}

/// `GET /move/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoveRecord {
    pub name: String,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub accuracy: Option<u32>,
    #[serde(default)]
    pub pp: Option<u32>,
    #[serde(rename = "type", default)]
    pub move_type: Option<NamedResource>,
    #[serde(default)]
    pub damage_class: Option<NamedResource>,
}

/// Parse a creature document
pub fn parse_pokemon(body: &str) -> Result<PokemonRecord> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyMessage.into());
    }

    let record: PokemonRecord = serde_json::from_str(body)
        .map_err(|e| ParseError::InvalidFormat(format!("pokemon document: {}", e)))?;

    if record.name.is_empty() {
        return Err(ParseError::MissingField("pokemon name".to_string()).into());
    }

    Ok(record)
}

/// Parse a move document
///
/// A move without a type cannot take part in a matchup, so it is rejected here.
pub fn parse_move(body: &str) -> Result<MoveRecord> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyMessage.into());
    }

    let record: MoveRecord = serde_json::from_str(body)
        .map_err(|e| ParseError::InvalidFormat(format!("move document: {}", e)))?;

    if record.name.is_empty() {
        return Err(ParseError::MissingField("move name".to_string()).into());
    }
    if record.move_type.is_none() {
        return Err(ParseError::MissingField("move type".to_string()).into());
    }

    Ok(record)
}

/// Human-readable move name: `"thunder-punch"` becomes `"Thunder Punch"`
pub fn display_move_name(raw: &str) -> String {
    raw.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lookup key for a creature name typed by a user
pub fn catalog_key(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
