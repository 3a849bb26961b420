//! Cost Direction Value Object

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a position was opened for a net credit or a net debit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostDirection {
    /// Premium received (negative net cost).
    Credit,
    /// Premium paid (positive net cost).
    Debit,
}

impl CostDirection {
    /// Direction of a net cost; `None` when flat.
    #[must_use]
    pub fn from_net_cost(net_cost: Decimal) -> Option<Self> {
        if net_cost < Decimal::ZERO {
            Some(Self::Credit)
        } else if net_cost > Decimal::ZERO {
            Some(Self::Debit)
        } else {
            None
        }
    }
}

impl fmt::Display for CostDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => write!(f, "credit"),
            Self::Debit => write!(f, "debit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn direction_from_sign() {
        assert_eq!(CostDirection::from_net_cost(dec!(-210.5)), Some(CostDirection::Credit));
        assert_eq!(CostDirection::from_net_cost(dec!(45)), Some(CostDirection::Debit));
        assert_eq!(CostDirection::from_net_cost(Decimal::ZERO), None);
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&CostDirection::Credit).unwrap();
        assert_eq!(json, "\"credit\"");
    }
}
