//! Positions held by rovers that have completed their command sequences.

use indexmap::IndexSet;
use regolith_core::Position;

/// The set of grid cells occupied by finalized rovers.
///
/// A rover's final position is recorded only after it completes its full
/// command sequence without being lost or clashing, never mid-sequence.
/// Clash detection therefore only sees *already-finalized* rovers; two
/// in-flight rovers can pass through the same cell freely.
///
/// Backed by an `IndexSet` so iteration follows finalization order
/// deterministically.
#[derive(Clone, Debug, Default)]
pub struct OccupancySet {
    positions: IndexSet<Position>,
}

impl OccupancySet {
    /// Create an empty set. Each mission run starts from one of these;
    /// nothing persists across runs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finalized rover's position.
    ///
    /// Returns `true` if the cell was newly recorded. The simulation
    /// loop never records a clashing rover, so a `false` return is not
    /// reachable from the engine; it is kept for direct users of this
    /// crate.
    pub fn record(&mut self, position: Position) -> bool {
        self.positions.insert(position)
    }

    /// Whether a finalized rover already holds `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Number of finalized rovers recorded.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no rover has been finalized yet.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate recorded positions in finalization order.
    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }
}
