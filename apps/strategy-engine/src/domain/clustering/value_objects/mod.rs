//! Clustering Value Objects

mod clustering_options;
mod leg_arena;
mod strategy_cluster;

pub use clustering_options::ClusteringOptions;
pub use leg_arena::LegArena;
pub use strategy_cluster::StrategyCluster;
