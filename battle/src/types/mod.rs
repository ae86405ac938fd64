//! Domain types for battles

mod moves;
mod pokemon;
mod pokemon_type;
mod side;
mod stats;

pub use moves::{DamageClass, Move};
pub use pokemon::{Combatant, MAX_ROSTER_MOVES, MoveRef};
pub use pokemon_type::{TYPE_CHART, Type, effectiveness_by_name};
pub use side::Side;
pub use stats::BaseStats;
