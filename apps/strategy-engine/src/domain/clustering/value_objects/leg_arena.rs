//! Leg Arena
//!
//! Legs addressed by stable index plus the per-run consumed set. Leg
//! records are never mutated; only the consumed flags change.

use crate::domain::position::Leg;

/// Snapshot legs with consumed-index bookkeeping for one clustering run.
#[derive(Debug)]
pub struct LegArena<'a> {
    legs: &'a [Leg],
    consumed: Vec<bool>,
}

impl<'a> LegArena<'a> {
    /// Arena over a snapshot; nothing consumed yet.
    #[must_use]
    pub fn new(legs: &'a [Leg]) -> Self {
        Self {
            legs,
            consumed: vec![false; legs.len()],
        }
    }

    /// Leg at an index.
    #[must_use]
    pub fn leg(&self, index: usize) -> &'a Leg {
        &self.legs[index]
    }

    /// Legs at the given indices, in the given order.
    #[must_use]
    pub fn legs_at(&self, indices: &[usize]) -> Vec<&'a Leg> {
        indices.iter().map(|&i| self.leg(i)).collect()
    }

    /// Check whether a leg already belongs to a cluster.
    #[must_use]
    pub fn is_consumed(&self, index: usize) -> bool {
        self.consumed[index]
    }

    /// The not-yet-consumed subset of `indices`, order preserved.
    #[must_use]
    pub fn unconsumed(&self, indices: &[usize]) -> Vec<usize> {
        indices
            .iter()
            .copied()
            .filter(|&i| !self.is_consumed(i))
            .collect()
    }

    /// Mark legs as consumed.
    pub fn consume(&mut self, indices: &[usize]) {
        for &i in indices {
            debug_assert!(!self.consumed[i], "leg {i} consumed twice");
            self.consumed[i] = true;
        }
    }

    /// Number of legs not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.consumed.iter().filter(|used| !**used).count()
    }
}
