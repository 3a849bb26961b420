//! Phase 1: same-expiration named clusters.
//!
//! Option legs are bucketed by (expiration, open date) so independently
//! opened trades are not merged. Within a bucket, a strike-sorted window
//! slides over the unused legs, largest size first; the first window the
//! chain names as a multi-leg strategy is committed.

use super::RootClustering;

const PHASE: &str = "same_expiration";

pub(in crate::domain::clustering::services) fn run(
    state: &mut RootClustering<'_, '_>,
    options: &[usize],
    window_sizes: &[usize],
) {
    let buckets = state.group_by(options, |leg| (leg.expiration(), leg.open_date()));

    for mut bucket in buckets.into_values() {
        bucket.sort_by_key(|&i| state.leg(i).strike_or_zero());

        for &size in window_sizes {
            let unused = state.unconsumed(&bucket);
            if unused.len() < 2 {
                break;
            }
            slide(state, &unused, size);
        }
    }
}

fn slide(state: &mut RootClustering<'_, '_>, unused: &[usize], size: usize) {
    let mut start = 0;
    while start + size <= unused.len() {
        let window = &unused[start..start + size];
        let classification = state.classify(window);

        if classification.name.is_named_combo() {
            state.commit(window, classification, PHASE);
            start += size;
        } else {
            start += 1;
        }
    }
}
