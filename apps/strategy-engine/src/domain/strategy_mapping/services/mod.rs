//! Strategy Mapping Services

mod default_rules;
mod strategy_id_mapper;

pub use strategy_id_mapper::StrategyIdMapper;
