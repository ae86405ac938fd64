//! Move roster: the resolved moves a side can pick from

use std::cmp::Ordering;

use indexmap::IndexSet;

use crate::types::{MAX_ROSTER_MOVES, Move};

/// A combatant's resolved moves, in resolution order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    moves: Vec<Move>,
}

impl Roster {
    /// Create a roster, keeping at most [`MAX_ROSTER_MOVES`] moves
    pub fn new(mut moves: Vec<Move>) -> Self {
        moves.truncate(MAX_ROSTER_MOVES);
        Self { moves }
    }

    /// Build a roster from a batch of resolution attempts, in move-list order
    ///
    /// Only the first [`MAX_ROSTER_MOVES`] attempts count, whether or not
    /// they succeeded. Failed resolutions are dropped.
    pub fn resolve<E>(results: impl IntoIterator<Item = Result<Move, E>>) -> Self {
        Self::new(
            results
                .into_iter()
                .take(MAX_ROSTER_MOVES)
                .filter_map(Result::ok)
                .collect(),
        )
    }

    /// All resolved moves
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Find a move by display name
    pub fn get(&self, name: &str) -> Option<&Move> {
        self.moves.iter().find(|m| m.name == name)
    }

    /// Moves not yet used, strongest first
    ///
    /// Equal power is ordered by name (case-insensitive, then exact).
    pub fn eligible(&self, used: &IndexSet<String>) -> Vec<&Move> {
        let mut eligible: Vec<&Move> = self
            .moves
            .iter()
            .filter(|m| !used.contains(&m.name))
            .collect();
        eligible.sort_by(|a, b| rank(a, b));
        eligible
    }
}

fn rank(a: &Move, b: &Move) -> Ordering {
    b.power
        .cmp(&a.power)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}
