//! Per-leg Greeks as exported by the broker.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::Add;

/// Position-level Greeks for one leg.
///
/// Values are taken verbatim from the export (already scaled by quantity),
/// so aggregation is a plain sum. Addition saturates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegGreeks {
    /// Delta.
    pub delta: Decimal,
    /// Beta-weighted delta.
    pub beta_delta: Decimal,
    /// Gamma.
    pub gamma: Decimal,
    /// Theta (per day).
    pub theta: Decimal,
    /// Vega.
    pub vega: Decimal,
}

impl LegGreeks {
    /// All-zero Greeks.
    pub const ZERO: Self = Self {
        delta: Decimal::ZERO,
        beta_delta: Decimal::ZERO,
        gamma: Decimal::ZERO,
        theta: Decimal::ZERO,
        vega: Decimal::ZERO,
    };
}

impl Add for LegGreeks {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            delta: self.delta.saturating_add(rhs.delta),
            beta_delta: self.beta_delta.saturating_add(rhs.beta_delta),
            gamma: self.gamma.saturating_add(rhs.gamma),
            theta: self.theta.saturating_add(rhs.theta),
            vega: self.vega.saturating_add(rhs.vega),
        }
    }
}

impl Sum for LegGreeks {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, g| acc + g)
    }
}
