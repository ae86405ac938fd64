//! Moves

use duel_protocol::{MoveRecord, display_move_name};

use super::pokemon_type::Type;
use crate::error::IngestError;

/// How a move deals damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DamageClass {
    Physical,
    Special,
    Status,
}

impl DamageClass {
    /// Parse a catalog damage class; anything unrecognised counts as status
    pub fn from_protocol(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "physical" => DamageClass::Physical,
            "special" => DamageClass::Special,
            _ => DamageClass::Status,
        }
    }
}

/// A resolved move
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Display name ("Thunder Punch"); used-move tracking goes by this name
    pub name: String,

    /// 0 for status moves
    pub power: u32,

    /// Percent, 100 when the catalog gives none
    pub accuracy: u32,

    pub move_type: Type,

    /// Power points
    pub pp: u32,

    pub damage_class: DamageClass,
}

impl Move {
    /// Create a damaging move with full accuracy
    pub fn new(name: impl Into<String>, move_type: Type, power: u32) -> Self {
        Self {
            name: name.into(),
            power,
            accuracy: 100,
            move_type,
            pp: 0,
            damage_class: if power > 0 {
                DamageClass::Physical
            } else {
                DamageClass::Status
            },
        }
    }

    /// Build from a catalog record
    ///
    /// A move whose type is missing or unknown cannot be resolved.
    pub fn from_protocol(record: &MoveRecord) -> Result<Self, IngestError> {
        let type_name = record
            .move_type
            .as_ref()
            .map(|t| t.name.as_str())
            .ok_or(IngestError::MissingField("type"))?;
        let move_type = Type::from_protocol(type_name)
            .ok_or_else(|| IngestError::UnknownType(type_name.to_string()))?;

        // The catalog reports 0 and null interchangeably for "no value"
        let accuracy = match record.accuracy {
            Some(0) | None => 100,
            Some(accuracy) => accuracy,
        };

        Ok(Self {
            name: display_move_name(&record.name),
            power: record.power.unwrap_or(0),
            accuracy,
            move_type,
            pp: record.pp.unwrap_or(0),
            damage_class: record
                .damage_class
                .as_ref()
                .map(|class| DamageClass::from_protocol(&class.name))
                .unwrap_or(DamageClass::Status),
        })
    }

    /// Accuracy as a fraction (1.0 = always hits)
    pub fn accuracy_fraction(&self) -> f64 {
        self.accuracy as f64 / 100.0
    }

    /// Check whether this is a status (non-damaging) move
    pub fn is_status(&self) -> bool {
        self.power == 0
    }
}
