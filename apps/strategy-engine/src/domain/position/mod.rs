//! Position Bounded Context
//!
//! Normalized position rows (stock and option legs) as handed over by the
//! broker-export parser. Legs are immutable inputs to classification and
//! clustering.

pub mod errors;
pub mod value_objects;

pub use errors::PositionError;
pub use value_objects::{AssetKind, Leg, LegGreeks, OptionSide, PositionDirection};
