//! Strategy Mapping Bounded Context
//!
//! Translates a classified strategy name plus the cluster's credit/debit
//! sign into the canonical identifier the triage engine keys its
//! strategy-specific configuration on.

pub mod services;
pub mod value_objects;

pub use services::StrategyIdMapper;
pub use value_objects::{CostDirection, MappingRule, NamePattern, StrategyId};
