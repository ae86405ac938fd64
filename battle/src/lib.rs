//! Battle resolution for two-creature duels.
//!
//! This crate holds the domain types and every piece of battle logic; it does
//! no I/O. Catalog records come in through `duel-protocol`, and the async
//! loading and turn acknowledgement plumbing lives in `duel-client`.
//!
//! # Overview
//!
//! ```text
//! duel-protocol (catalog wire records)
//!        │
//!        ▼
//! duel-battle (types, scoring, sessions) ← THIS CRATE
//!        │
//!        └─> duel-client (catalog fetching, turn driver)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - Creature types with the effectiveness chart
//! - [`Combatant`] - A creature's stats, types and move references
//! - [`Move`] - A resolved move
//! - [`Roster`] - The moves a side can pick from
//!
//! ## Resolution
//! - [`type_matchup`] / [`EffectivenessResult`] - Aggregate type matchup
//! - [`quick_verdict`] / [`BattleResult`] - Single-shot scored verdict
//! - [`BattleSession`] - Turn-based battle with health pools
//!
//! # Example Usage
//!
//! ```ignore
//! use duel_battle::{BattleSession, Side};
//!
//! let mut session = BattleSession::with_combatants(charmander, bulbasaur);
//! session.select_move(Side::A, ember)?;
//! session.select_move(Side::B, vine_whip)?;
//!
//! let report = session.start_battle()?;
//! // ... animate the turn ...
//! let outcome = session.acknowledge_turn(report.ticket)?;
//! println!("{} HP left", outcome.health[0]);
//! ```

pub mod error;
pub mod query;
pub mod scoring;
pub mod session;
pub mod types;

// Re-export main types at crate root for convenience
pub use error::{IngestError, SessionError};
pub use query::{EffectivenessResult, move_effectiveness, type_matchup};
pub use scoring::{BattleResult, ScoreBreakdown, quick_verdict};
pub use session::{
    BattlePhase, BattleSession, MAX_HEALTH, Roster, TurnOutcome, TurnReport, TurnTicket,
};
pub use types::{
    BaseStats, Combatant, DamageClass, MAX_ROSTER_MOVES, Move, MoveRef, Side, TYPE_CHART, Type,
    effectiveness_by_name,
};
