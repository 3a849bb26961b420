//! Phase 5: cross-expiration pairing.
//!
//! Leftover same-side, opposite-direction legs with different expirations
//! are paired into calendars and diagonals. Candidates are ranked by
//! pattern, then by the gap between expirations, and committed greedily.

use super::RootClustering;
use crate::domain::position::{Leg, OptionSide};

const PHASE: &str = "cross_expiration";

/// Pairing preference, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum PairPattern {
    /// Same strike.
    Calendar,
    /// Long leg further out and deeper in the money than the short leg.
    PoorMansCovered,
    Diagonal,
}

#[derive(Debug)]
struct Candidate {
    pattern: PairPattern,
    gap_days: i64,
    legs: [usize; 2],
}

pub(in crate::domain::clustering::services) fn run(
    state: &mut RootClustering<'_, '_>,
    options: &[usize],
) {
    let unused = state.unconsumed(options);
    let groups = state.group_by(&unused, Leg::open_date);

    for group in groups.into_values() {
        let mut candidates = Vec::new();
        for (n, &i) in group.iter().enumerate() {
            for &j in &group[n + 1..] {
                if let Some(candidate) = candidate(state.leg(i), state.leg(j), [i, j]) {
                    candidates.push(candidate);
                }
            }
        }

        candidates.sort_by_key(|c| (c.pattern, c.gap_days));

        for candidate in candidates {
            if candidate.legs.iter().any(|&i| state.is_consumed(i)) {
                continue;
            }
            tracing::trace!(pattern = ?candidate.pattern, gap_days = candidate.gap_days, "calendar pair");
            state.commit_classified(&candidate.legs, PHASE);
        }
    }
}

fn candidate(a: &Leg, b: &Leg, legs: [usize; 2]) -> Option<Candidate> {
    let side = a.side()?;
    if b.side() != Some(side) || a.direction() == b.direction() {
        return None;
    }
    let (exp_a, exp_b) = (a.expiration()?, b.expiration()?);
    if exp_a == exp_b {
        return None;
    }

    let (long, short) = if a.is_short() { (b, a) } else { (a, b) };
    Some(Candidate {
        pattern: pattern(side, long, short),
        gap_days: (exp_a - exp_b).num_days().abs(),
        legs,
    })
}

fn pattern(side: OptionSide, long: &Leg, short: &Leg) -> PairPattern {
    let (long_strike, short_strike) = (long.strike_or_zero(), short.strike_or_zero());
    if long_strike == short_strike {
        return PairPattern::Calendar;
    }

    let long_is_later = long.expiration() > short.expiration();
    let long_is_deeper = match side {
        OptionSide::Call => long_strike < short_strike,
        OptionSide::Put => long_strike > short_strike,
    };

    if long_is_later && long_is_deeper {
        PairPattern::PoorMansCovered
    } else {
        PairPattern::Diagonal
    }
}
