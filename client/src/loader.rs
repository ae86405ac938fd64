//! Concurrent loading of combatants and their move rosters

use duel_battle::{Combatant, Move, Roster};
use futures_util::future::join_all;

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// Fetch both combatants at once
///
/// A side that cannot be fetched comes back as `None`; the other side is
/// unaffected.
pub async fn load_combatants<C: Catalog>(
    catalog: &C,
    name_a: &str,
    name_b: &str,
) -> [Option<Combatant>; 2] {
    let (a, b) = tokio::join!(
        catalog.fetch_combatant(name_a),
        catalog.fetch_combatant(name_b)
    );
    [available(name_a, a), available(name_b, b)]
}

/// Resolve a combatant's move references into a roster
///
/// Only the first [`duel_battle::MAX_ROSTER_MOVES`] references are requested.
/// All requests run together and the roster is built once every one of them
/// has settled; failures are left out.
pub async fn load_roster<C: Catalog>(catalog: &C, combatant: &Combatant) -> Roster {
    let refs = combatant.roster_refs();
    let results = join_all(refs.iter().map(|move_ref| catalog.fetch_move(move_ref))).await;

    let results: Vec<Result<Move, CatalogError>> = results
        .into_iter()
        .zip(refs)
        .map(|(result, move_ref)| {
            result.inspect_err(|e| {
                tracing::debug!(combatant = %combatant.name, name = %move_ref.name, error = %e, "Move dropped from roster");
            })
        })
        .collect();

    let roster = Roster::resolve(results);
    tracing::debug!(
        combatant = %combatant.name,
        requested = refs.len(),
        resolved = roster.len(),
        "Roster resolved"
    );
    roster
}

fn available(name: &str, result: Result<Combatant, CatalogError>) -> Option<Combatant> {
    match result {
        Ok(combatant) => Some(combatant),
        Err(e) => {
            tracing::warn!(name = %name, error = %e, "Combatant unavailable");
            None
        }
    }
}
