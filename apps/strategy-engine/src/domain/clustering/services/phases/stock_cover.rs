//! Phase 6: stock combinations.
//!
//! Stock legs absorb leftover options of the same root. Shapes are tried
//! widest first; each repeats while a stock leg and every required option
//! remain unused.

use super::RootClustering;
use crate::domain::position::{OptionSide, PositionDirection};

const PHASE: &str = "stock_cover";

type Requirement = (OptionSide, PositionDirection);

const SHORT_CALL: Requirement = (OptionSide::Call, PositionDirection::Short);
const SHORT_PUT: Requirement = (OptionSide::Put, PositionDirection::Short);
const LONG_PUT: Requirement = (OptionSide::Put, PositionDirection::Long);

/// Covered strangle, collar, covered call, covered put.
const SHAPES: [&[Requirement]; 4] = [
    &[SHORT_CALL, SHORT_PUT],
    &[LONG_PUT, SHORT_CALL],
    &[SHORT_CALL],
    &[SHORT_PUT],
];

pub(in crate::domain::clustering::services) fn run(
    state: &mut RootClustering<'_, '_>,
    stock: &[usize],
    options: &[usize],
) {
    for shape in SHAPES {
        while let Some(group) = next_group(state, stock, options, shape) {
            state.commit_classified(&group, PHASE);
        }
    }
}

fn next_group(
    state: &RootClustering<'_, '_>,
    stock: &[usize],
    options: &[usize],
    shape: &[Requirement],
) -> Option<Vec<usize>> {
    let share = stock.iter().copied().find(|&i| !state.is_consumed(i))?;

    let mut group = vec![share];
    for &(side, direction) in shape {
        let option = options.iter().copied().find(|&i| {
            let leg = state.leg(i);
            !state.is_consumed(i)
                && !group.contains(&i)
                && leg.side() == Some(side)
                && leg.direction() == direction
        })?;
        group.push(option);
    }
    Some(group)
}
