//! Strategy Clustering Bounded Context
//!
//! Partitions a flat snapshot of legs into clusters believed to form one
//! strategy each. Clustering is greedy and phased: wider named shapes are
//! attempted before looser pairings, and every phase only sees the legs
//! earlier phases left unused.

pub mod services;
pub mod value_objects;

pub use services::ClusteringService;
pub use value_objects::{ClusteringOptions, LegArena, StrategyCluster};
