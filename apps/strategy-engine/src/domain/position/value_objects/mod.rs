//! Position Value Objects

mod asset_kind;
mod leg;
mod leg_greeks;
mod option_side;

pub use asset_kind::AssetKind;
pub use leg::{Leg, PositionDirection};
pub use leg_greeks::LegGreeks;
pub use option_side::OptionSide;
