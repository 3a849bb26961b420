//! Strategy Mapping Value Objects

mod cost_direction;
mod mapping_rule;
mod strategy_id;

pub use cost_direction::CostDirection;
pub use mapping_rule::{MappingRule, NamePattern};
pub use strategy_id::StrategyId;
