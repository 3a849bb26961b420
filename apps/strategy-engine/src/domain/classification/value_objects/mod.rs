//! Classification Value Objects

mod context;
mod strategy_name;

pub use context::{ClassificationContext, LegBucket};
pub use strategy_name::StrategyName;
