//! Domain Layer
//!
//! Business logic with no I/O. Each bounded context owns its value objects,
//! services and errors.
//!
//! # Bounded Contexts
//!
//! - [`position`]: Position legs as reported by the broker
//! - [`classification`]: Ordered rule chain naming a group of legs
//! - [`clustering`]: Partitioning a snapshot into strategy clusters
//! - [`strategy_mapping`]: Canonical strategy identifiers for names

pub mod classification;
pub mod clustering;
pub mod position;
pub mod shared;
pub mod strategy_mapping;
