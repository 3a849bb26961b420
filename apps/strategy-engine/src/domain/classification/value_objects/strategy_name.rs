//! Strategy Name Value Object

use std::fmt;

use crate::domain::position::{OptionSide, PositionDirection};

/// Closed vocabulary of strategy names produced by classification.
///
/// `Display` renders the canonical name used downstream, e.g.
/// `"Vertical Spread (Call)"` or `"Put Broken Wing/Heart Butterfly"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyName {
    /// Zero legs.
    Empty,
    /// A lone stock holding.
    Stock,
    /// Single long call.
    LongCall,
    /// Single short call.
    ShortCall,
    /// Single long put.
    LongPut,
    /// Single short put.
    ShortPut,
    /// Single option whose call/put side is unknown.
    SingleOptionUnknown,
    /// Short call + short put at the same strike.
    ShortStraddle,
    /// Short call + short put at different strikes.
    ShortStrangle,
    /// One long and one short leg, same side and expiration.
    VerticalSpread(OptionSide),
    /// Stock + short call + short put.
    CoveredStrangle,
    /// Stock + short call.
    CoveredCall,
    /// Stock + short put.
    CoveredPut,
    /// Stock + long put + short call.
    Collar,
    /// Stock with options in no recognized shape.
    StockCombo,
    /// Same side and strike, different expirations.
    CalendarSpread(OptionSide),
    /// Same side, different strikes and expirations.
    DiagonalSpread(OptionSide),
    /// Two legs across expirations in no recognized shape.
    MultiExpCombo,
    /// Iron condor whose short strikes coincide.
    IronFly,
    /// Iron condor with unequal wing widths.
    DynamicWidthIronCondor,
    /// Call vertical + put vertical with equal wings.
    IronCondor,
    /// Symmetric single-side butterfly.
    Butterfly(OptionSide),
    /// Asymmetric single-side butterfly.
    BrokenWingButterfly(OptionSide),
    /// Short put + short call vertical with the short put at or above spot.
    BigLizard,
    /// Short call + short put vertical with the short call at or below spot.
    ReverseBigLizard,
    /// Short put + short call vertical.
    JadeLizard,
    /// Short call + short put vertical.
    ReverseJadeLizard,
    /// Two long per one short on the same side.
    Zebra(OptionSide),
    /// Same side, unequal quantities.
    RatioSpread(OptionSide),
    /// No rule matched.
    CustomCombo,
}

impl StrategyName {
    /// Name for a single option leg.
    #[must_use]
    pub const fn single(side: OptionSide, direction: PositionDirection) -> Self {
        match (side, direction) {
            (OptionSide::Call, PositionDirection::Long) => Self::LongCall,
            (OptionSide::Call, PositionDirection::Short) => Self::ShortCall,
            (OptionSide::Put, PositionDirection::Long) => Self::LongPut,
            (OptionSide::Put, PositionDirection::Short) => Self::ShortPut,
        }
    }

    /// Fallback names: classification produced no specific shape.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(
            self,
            Self::Empty | Self::CustomCombo | Self::StockCombo | Self::MultiExpCombo
        )
    }

    /// Names that describe exactly one leg.
    #[must_use]
    pub const fn is_single_leg(&self) -> bool {
        matches!(
            self,
            Self::Stock
                | Self::LongCall
                | Self::ShortCall
                | Self::LongPut
                | Self::ShortPut
                | Self::SingleOptionUnknown
        )
    }

    /// A specific multi-leg strategy (neither fallback nor single leg).
    #[must_use]
    pub const fn is_named_combo(&self) -> bool {
        !self.is_fallback() && !self.is_single_leg()
    }

    /// Side carried by side-parameterized names.
    #[must_use]
    pub const fn side(&self) -> Option<OptionSide> {
        match self {
            Self::VerticalSpread(side)
            | Self::CalendarSpread(side)
            | Self::DiagonalSpread(side)
            | Self::Butterfly(side)
            | Self::BrokenWingButterfly(side)
            | Self::Zebra(side)
            | Self::RatioSpread(side) => Some(*side),
            _ => None,
        }
    }
}

impl fmt::Display for StrategyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Stock => write!(f, "Stock"),
            Self::LongCall => write!(f, "Long Call"),
            Self::ShortCall => write!(f, "Short Call"),
            Self::LongPut => write!(f, "Long Put"),
            Self::ShortPut => write!(f, "Short Put"),
            Self::SingleOptionUnknown => write!(f, "Single Option (Unknown Type)"),
            Self::ShortStraddle => write!(f, "Short Straddle"),
            Self::ShortStrangle => write!(f, "Short Strangle"),
            Self::VerticalSpread(side) => write!(f, "Vertical Spread ({side})"),
            Self::CoveredStrangle => write!(f, "Covered Strangle"),
            Self::CoveredCall => write!(f, "Covered Call"),
            Self::CoveredPut => write!(f, "Covered Put"),
            Self::Collar => write!(f, "Collar"),
            Self::StockCombo => write!(f, "Custom/Combo (Stock)"),
            Self::CalendarSpread(side) => write!(f, "Calendar Spread ({side})"),
            Self::DiagonalSpread(side) => write!(f, "Diagonal Spread ({side})"),
            Self::MultiExpCombo => write!(f, "Multi-Exp Combo"),
            Self::IronFly => write!(f, "Iron Fly"),
            Self::DynamicWidthIronCondor => write!(f, "Dynamic Width Iron Condor"),
            Self::IronCondor => write!(f, "Iron Condor"),
            Self::Butterfly(side) => write!(f, "{side} Butterfly"),
            Self::BrokenWingButterfly(side) => write!(f, "{side} Broken Wing/Heart Butterfly"),
            Self::BigLizard => write!(f, "Big Lizard"),
            Self::ReverseBigLizard => write!(f, "Reverse Big Lizard"),
            Self::JadeLizard => write!(f, "Jade Lizard"),
            Self::ReverseJadeLizard => write!(f, "Reverse Jade Lizard"),
            Self::Zebra(side) => write!(f, "{side} ZEBRA"),
            Self::RatioSpread(side) => write!(f, "Ratio Spread ({side})"),
            Self::CustomCombo => write!(f, "Custom/Combo"),
        }
    }
}
