//! Clustering Service
//!
//! Greedy, phased partitioning of a position snapshot into strategy
//! clusters. Every leg ends up in exactly one cluster.
//!
//! Per root ticker, in order:
//!
//! 1. Same-expiration windows the chain names as multi-leg strategies
//! 2. Verticals (nearest-strike short/long pairs)
//! 3. Condors: nothing left to do after phases 1 and 2
//! 4. Short strangles/straddles (deferred after phase 6 when the root holds stock)
//! 5. Calendars and diagonals across expirations
//! 6. Stock covered by options
//! 7. Leftovers as single-leg clusters

use std::collections::BTreeMap;

use super::phases::{RootClustering, cross_expiration, pairing, same_expiration, stock_cover};
use crate::domain::classification::ClassifierChain;
use crate::domain::clustering::value_objects::{ClusteringOptions, LegArena, StrategyCluster};
use crate::domain::position::Leg;

/// Partitions legs into named strategy clusters.
#[derive(Debug, Clone)]
pub struct ClusteringService<'c> {
    chain: &'c ClassifierChain,
    options: ClusteringOptions,
}

impl<'c> ClusteringService<'c> {
    /// Create a clustering service backed by a classifier chain.
    #[must_use]
    pub const fn new(chain: &'c ClassifierChain, options: ClusteringOptions) -> Self {
        Self { chain, options }
    }

    /// Get the clustering options.
    #[must_use]
    pub const fn options(&self) -> &ClusteringOptions {
        &self.options
    }

    /// Partition a snapshot into clusters.
    ///
    /// Roots are processed in ascending order; within a root, clusters are
    /// listed in the order they were committed. Legs inside a cluster keep
    /// snapshot order. The result is deterministic for a given input order.
    #[must_use]
    pub fn cluster(&self, legs: &[Leg]) -> Vec<StrategyCluster> {
        let mut roots: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (i, leg) in legs.iter().enumerate() {
            roots.entry(leg.root()).or_default().push(i);
        }

        let mut arena = LegArena::new(legs);
        let mut clusters = Vec::new();
        for (root, indices) in roots {
            clusters.extend(self.cluster_root(&mut arena, root, &indices));
        }

        debug_assert_eq!(arena.remaining(), 0, "every leg belongs to a cluster");
        tracing::debug!(legs = legs.len(), clusters = clusters.len(), "clustering complete");
        clusters
    }

    fn cluster_root(
        &self,
        arena: &mut LegArena<'_>,
        root: &str,
        indices: &[usize],
    ) -> Vec<StrategyCluster> {
        let (stock, options): (Vec<usize>, Vec<usize>) =
            indices.iter().partition(|&&i| arena.leg(i).is_stock());
        let has_stock = !stock.is_empty();

        let mut state = RootClustering::new(self.chain, arena, root);

        same_expiration::run(&mut state, &options, &self.options.window_sizes);
        pairing::pair_verticals(&mut state, &options);
        if !has_stock {
            pairing::pair_strangles(&mut state, &options);
        }
        cross_expiration::run(&mut state, &options);
        stock_cover::run(&mut state, &stock, &options);
        if has_stock {
            pairing::pair_strangles(&mut state, &options);
        }

        for i in state.unconsumed(indices) {
            state.commit_classified(&[i], "singleton");
        }

        tracing::trace!(root, legs = indices.len(), "root clustered");
        state.into_clusters()
    }
}
