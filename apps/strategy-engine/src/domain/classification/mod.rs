//! Strategy Classification Bounded Context
//!
//! Names a candidate group of legs from a closed strategy vocabulary:
//! - `ClassificationContext`: read-only aggregation over one candidate group
//! - `ClassifierChain`: ordered guard/namer rules, first match wins
//! - `StrategyName`: the vocabulary itself

pub mod services;
pub mod value_objects;

pub use services::{Classification, ClassifierChain, ClassifierRule};
pub use value_objects::{ClassificationContext, LegBucket, StrategyName};
