//! Phases 2–4: same-expiration pairing.
//!
//! - Verticals: each short leg takes the nearest-strike unused long leg of
//!   the same side (ties go to the earlier leg).
//! - Condors: a call vertical and a put vertical stay separate clusters;
//!   a genuine four-leg iron condor/fly was already caught by phase 1.
//! - Strangles: leftover short calls and short puts pair one-to-one in
//!   snapshot order.

use super::RootClustering;
use crate::domain::position::{Leg, OptionSide, PositionDirection};

fn is(leg: &Leg, side: OptionSide, direction: PositionDirection) -> bool {
    leg.side() == Some(side) && leg.direction() == direction
}

pub(in crate::domain::clustering::services) fn pair_verticals(
    state: &mut RootClustering<'_, '_>,
    options: &[usize],
) {
    let unused = state.unconsumed(options);
    let buckets = state.group_by(&unused, Leg::expiration);

    for bucket in buckets.into_values() {
        for side in [OptionSide::Call, OptionSide::Put] {
            let shorts: Vec<usize> = bucket
                .iter()
                .copied()
                .filter(|&i| is(state.leg(i), side, PositionDirection::Short))
                .collect();

            for short in shorts {
                let strike = state.leg(short).strike_or_zero();
                let nearest_long = bucket
                    .iter()
                    .copied()
                    .filter(|&i| !state.is_consumed(i))
                    .filter(|&i| is(state.leg(i), side, PositionDirection::Long))
                    .min_by_key(|&i| (state.leg(i).strike_or_zero() - strike).abs());

                if let Some(long) = nearest_long {
                    state.commit_classified(&[short, long], "vertical");
                }
            }
        }
    }
}

pub(in crate::domain::clustering::services) fn pair_strangles(
    state: &mut RootClustering<'_, '_>,
    options: &[usize],
) {
    let unused = state.unconsumed(options);
    let buckets = state.group_by(&unused, Leg::expiration);

    for bucket in buckets.into_values() {
        let of = |side| -> Vec<usize> {
            bucket
                .iter()
                .copied()
                .filter(|&i| is(state.leg(i), side, PositionDirection::Short))
                .collect()
        };
        let (calls, puts) = (of(OptionSide::Call), of(OptionSide::Put));

        for (call, put) in calls.into_iter().zip(puts) {
            state.commit_classified(&[call, put], "strangle");
        }
    }
}
