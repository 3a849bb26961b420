//! Strategy Cluster Value Object

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::classification::{Classification, StrategyName};
use crate::domain::position::{Leg, LegGreeks};
use crate::domain::strategy_mapping::{CostDirection, StrategyId};

/// Legs believed to form one strategy, with their classified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyCluster {
    /// Root ticker shared by every leg.
    root: String,
    /// Legs in snapshot order.
    legs: Vec<Leg>,
    /// Classified name.
    name: StrategyName,
    /// Classifier rule that produced the name.
    rule: Option<&'static str>,
    /// Canonical identifier, once mapped.
    strategy_id: Option<StrategyId>,
}

impl StrategyCluster {
    /// Create a cluster from its legs and classification.
    #[must_use]
    pub fn new(root: impl Into<String>, legs: Vec<Leg>, classification: Classification) -> Self {
        Self {
            root: root.into(),
            legs,
            name: classification.name,
            rule: classification.rule,
            strategy_id: None,
        }
    }

    /// Attach the mapped strategy identifier.
    #[must_use]
    pub fn with_strategy_id(mut self, strategy_id: Option<StrategyId>) -> Self {
        self.strategy_id = strategy_id;
        self
    }

    /// Get the root ticker.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Get the legs.
    #[must_use]
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Get the number of legs.
    #[must_use]
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Get the strategy name.
    #[must_use]
    pub const fn name(&self) -> StrategyName {
        self.name
    }

    /// Get the classifier rule id.
    #[must_use]
    pub const fn rule(&self) -> Option<&'static str> {
        self.rule
    }

    /// Get the mapped strategy identifier.
    #[must_use]
    pub const fn strategy_id(&self) -> Option<&StrategyId> {
        self.strategy_id.as_ref()
    }

    /// Summed cost basis (negative = net credit).
    #[must_use]
    pub fn net_cost(&self) -> Decimal {
        self.legs.iter().map(Leg::cost).fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Credit or debit, from the net cost sign.
    #[must_use]
    pub fn cost_direction(&self) -> Option<CostDirection> {
        CostDirection::from_net_cost(self.net_cost())
    }

    /// Summed open P/L.
    #[must_use]
    pub fn pnl_open(&self) -> Decimal {
        self.legs.iter().map(Leg::pnl_open).fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Aggregate position Greeks.
    #[must_use]
    pub fn greeks(&self) -> LegGreeks {
        self.legs.iter().map(|leg| *leg.greeks()).sum()
    }

    /// Underlying price (first positive value among the legs).
    #[must_use]
    pub fn underlying_price(&self) -> Decimal {
        self.legs
            .iter()
            .map(Leg::underlying_price)
            .find(|price| *price > Decimal::ZERO)
            .unwrap_or(Decimal::ZERO)
    }

    /// Distinct expirations, ascending.
    #[must_use]
    pub fn expirations(&self) -> Vec<NaiveDate> {
        self.legs
            .iter()
            .filter_map(Leg::expiration)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Check whether the legs span more than one expiration.
    #[must_use]
    pub fn is_multi_expiration(&self) -> bool {
        self.expirations().len() > 1
    }

    /// Days until the nearest expiration.
    #[must_use]
    pub fn min_dte(&self, as_of: NaiveDate) -> Option<i64> {
        self.legs.iter().filter_map(|leg| leg.dte(as_of)).min()
    }
}
