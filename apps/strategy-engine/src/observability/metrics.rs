//! Analysis metrics.
//!
//! Emitted through the `metrics` facade; without an installed recorder
//! they are no-ops.

use metrics::{counter, histogram};

/// Record one analysis run.
///
/// # Arguments
///
/// * `legs` - Number of legs in the snapshot
pub fn record_positions_analyzed(legs: usize) {
    counter!("positions_analyzed_total").increment(legs as u64);
}

/// Record a committed cluster.
///
/// # Arguments
///
/// * `strategy` - Classified strategy name (e.g., `"Iron Condor"`)
/// * `leg_count` - Legs in the cluster
#[allow(clippy::cast_precision_loss)] // leg counts are tiny
pub fn record_strategy_cluster(strategy: &str, leg_count: usize) {
    counter!(
        "strategy_clusters_total",
        "strategy" => strategy.to_string()
    )
    .increment(1);

    histogram!("cluster_leg_count").record(leg_count as f64);
}

/// Record a cluster whose name has no strategy id.
///
/// # Arguments
///
/// * `strategy` - Classified strategy name
pub fn record_unmapped_strategy(strategy: &str) {
    counter!(
        "unmapped_strategies_total",
        "strategy" => strategy.to_string()
    )
    .increment(1);
}
