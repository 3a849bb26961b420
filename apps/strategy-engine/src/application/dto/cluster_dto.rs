//! Cluster DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::clustering::StrategyCluster;
use crate::domain::position::{AssetKind, Leg, LegGreeks, OptionSide};
use crate::domain::strategy_mapping::CostDirection;

/// One classified strategy cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterDto {
    /// Root ticker.
    pub root: String,
    /// Classified strategy name.
    pub strategy: String,
    /// Canonical strategy id, if the name is mapped.
    pub strategy_id: Option<String>,
    /// Classifier rule that produced the name.
    pub rule: Option<String>,
    /// Credit or debit.
    pub cost_direction: Option<CostDirection>,
    /// Net cost basis.
    pub net_cost: Decimal,
    /// Net open P/L.
    pub pnl_open: Decimal,
    /// Aggregate Greeks.
    pub greeks: LegGreeks,
    /// Legs in snapshot order.
    pub legs: Vec<LegSummaryDto>,
}

impl From<&StrategyCluster> for ClusterDto {
    fn from(cluster: &StrategyCluster) -> Self {
        Self {
            root: cluster.root().to_string(),
            strategy: cluster.name().to_string(),
            strategy_id: cluster.strategy_id().map(ToString::to_string),
            rule: cluster.rule().map(str::to_string),
            cost_direction: cluster.cost_direction(),
            net_cost: cluster.net_cost(),
            pnl_open: cluster.pnl_open(),
            greeks: cluster.greeks(),
            legs: cluster.legs().iter().map(LegSummaryDto::from).collect(),
        }
    }
}

/// Compact view of a leg inside a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegSummaryDto {
    /// Symbol.
    pub symbol: String,
    /// Stock or option.
    pub kind: AssetKind,
    /// Signed quantity.
    pub quantity: Decimal,
    /// Strike, for options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike: Option<Decimal>,
    /// Call or put, for options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OptionSide>,
    /// Expiration, for options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<NaiveDate>,
}

impl From<&Leg> for LegSummaryDto {
    fn from(leg: &Leg) -> Self {
        Self {
            symbol: leg.symbol().to_string(),
            kind: leg.kind(),
            quantity: leg.quantity(),
            strike: leg.strike(),
            side: leg.side(),
            expiration: leg.expiration(),
        }
    }
}
