//! Clustering phases.
//!
//! Each phase receives the root's leg indices, proposes candidate groups to
//! the classifier chain through [`RootClustering`] and commits the accepted
//! ones. Committed legs are consumed; later phases only see leftovers.

pub(super) mod cross_expiration;
pub(super) mod pairing;
pub(super) mod same_expiration;
pub(super) mod stock_cover;

use std::collections::BTreeMap;

use crate::domain::classification::{Classification, ClassifierChain};
use crate::domain::clustering::value_objects::{LegArena, StrategyCluster};
use crate::domain::position::Leg;

/// Working state for clustering one root symbol.
pub(super) struct RootClustering<'r, 'a> {
    chain: &'r ClassifierChain,
    arena: &'r mut LegArena<'a>,
    root: &'r str,
    clusters: Vec<StrategyCluster>,
}

impl<'r, 'a> RootClustering<'r, 'a> {
    pub(super) fn new(
        chain: &'r ClassifierChain,
        arena: &'r mut LegArena<'a>,
        root: &'r str,
    ) -> Self {
        Self {
            chain,
            arena,
            root,
            clusters: Vec::new(),
        }
    }

    pub(super) fn leg(&self, index: usize) -> &'a Leg {
        self.arena.leg(index)
    }

    pub(super) fn is_consumed(&self, index: usize) -> bool {
        self.arena.is_consumed(index)
    }

    pub(super) fn unconsumed(&self, indices: &[usize]) -> Vec<usize> {
        self.arena.unconsumed(indices)
    }

    /// Classify a candidate group without committing it.
    pub(super) fn classify(&self, indices: &[usize]) -> Classification {
        self.chain.explain(&self.arena.legs_at(indices))
    }

    /// Consume the legs and record them as one cluster.
    pub(super) fn commit(&mut self, indices: &[usize], classification: Classification, phase: &str) {
        let mut ordered = indices.to_vec();
        ordered.sort_unstable();
        self.arena.consume(&ordered);

        tracing::debug!(
            root = self.root,
            phase,
            strategy = %classification.name,
            rule = classification.rule.unwrap_or("-"),
            legs = ordered.len(),
            "cluster committed"
        );

        let legs = ordered.iter().map(|&i| self.arena.leg(i).clone()).collect();
        self.clusters
            .push(StrategyCluster::new(self.root, legs, classification));
    }

    /// Classify and commit in one step.
    pub(super) fn commit_classified(&mut self, indices: &[usize], phase: &str) {
        let classification = self.classify(indices);
        self.commit(indices, classification, phase);
    }

    /// Group indices by a key, preserving input order within each group.
    pub(super) fn group_by<K, F>(&self, indices: &[usize], key: F) -> BTreeMap<K, Vec<usize>>
    where
        K: Ord,
        F: Fn(&Leg) -> K,
    {
        let mut groups: BTreeMap<K, Vec<usize>> = BTreeMap::new();
        for &i in indices {
            groups.entry(key(self.leg(i))).or_default().push(i);
        }
        groups
    }

    pub(super) fn into_clusters(self) -> Vec<StrategyCluster> {
        self.clusters
    }
}
