//! Async edge of the duel engine.
//!
//! Fetches combatants and moves from a catalog, builds rosters concurrently,
//! and runs battle turns through a presentation layer that acknowledges each
//! one before it is applied.
//!
//! # Example
//!
//! ```ignore
//! use duel_client::{CatalogConfig, PokeApiClient, load_combatants};
//!
//! let catalog = PokeApiClient::new(CatalogConfig::from_env()?)?;
//! let [a, b] = load_combatants(&catalog, "charizard", "venusaur").await;
//! if let (Some(a), Some(b)) = (a, b) {
//!     let result = duel_battle::quick_verdict(&a, &b, None);
//!     println!("{} wins: {}", result.winner, result.reason);
//! }
//! ```

mod catalog;
mod config;
mod driver;
mod error;
mod loader;

pub use catalog::{Catalog, PokeApiClient};
pub use config::{
    CATALOG_TIMEOUT_VAR, CATALOG_URL_VAR, CatalogConfig, DEFAULT_CATALOG_URL, RetryPolicy,
};
pub use driver::{ArenaEvent, TurnDriver};
pub use error::CatalogError;
pub use loader::{load_combatants, load_roster};
