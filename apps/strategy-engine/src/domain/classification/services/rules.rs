//! Guard and naming rules of the standard classifier chain.
//!
//! Each rule pairs a guard (does the group have this shape?) with a namer
//! (which name within the shape?). Rule order lives in
//! [`ClassifierChain::standard`](super::ClassifierChain::standard).

use rust_decimal::Decimal;

use crate::domain::classification::value_objects::{ClassificationContext, StrategyName};
use crate::domain::position::{Leg, OptionSide, PositionDirection};

// =============================================================================
// 1. Stock
// =============================================================================

pub(super) fn is_stock(ctx: &ClassificationContext<'_>) -> bool {
    ctx.leg_count() == 1 && ctx.stock_count() == 1
}

pub(super) fn name_stock(_ctx: &ClassificationContext<'_>) -> StrategyName {
    StrategyName::Stock
}

// =============================================================================
// 2. Single option
// =============================================================================

pub(super) fn is_single_option(ctx: &ClassificationContext<'_>) -> bool {
    ctx.is_options_only(1)
}

pub(super) fn name_single_option(ctx: &ClassificationContext<'_>) -> StrategyName {
    ctx.options()
        .first()
        .and_then(|leg| leg.side().map(|side| StrategyName::single(side, leg.direction())))
        .unwrap_or(StrategyName::SingleOptionUnknown)
}

// =============================================================================
// 3. Short straddle / strangle
// =============================================================================

pub(super) fn is_short_premium_pair(ctx: &ClassificationContext<'_>) -> bool {
    ctx.is_options_only(2) && ctx.short_calls().count() == 1 && ctx.short_puts().count() == 1
}

pub(super) fn name_short_premium_pair(ctx: &ClassificationContext<'_>) -> StrategyName {
    if ctx.short_calls().lowest_strike() == ctx.short_puts().lowest_strike() {
        StrategyName::ShortStraddle
    } else {
        StrategyName::ShortStrangle
    }
}

// =============================================================================
// 4. Vertical spread
// =============================================================================

/// Side holding exactly one long and one short leg of equal size.
fn balanced_vertical_side(ctx: &ClassificationContext<'_>) -> Option<OptionSide> {
    [OptionSide::Call, OptionSide::Put].into_iter().find(|&side| {
        let short = ctx.bucket(side, PositionDirection::Short);
        let long = ctx.bucket(side, PositionDirection::Long);
        short.count() == 1 && long.count() == 1 && short.quantity() == long.quantity()
    })
}

pub(super) fn is_vertical(ctx: &ClassificationContext<'_>) -> bool {
    ctx.is_options_only(2) && !ctx.is_multi_exp() && balanced_vertical_side(ctx).is_some()
}

pub(super) fn name_vertical(ctx: &ClassificationContext<'_>) -> StrategyName {
    balanced_vertical_side(ctx).map_or(StrategyName::CustomCombo, StrategyName::VerticalSpread)
}

// =============================================================================
// 5. Stock + options
// =============================================================================

pub(super) fn is_stock_combo(ctx: &ClassificationContext<'_>) -> bool {
    ctx.stock_count() >= 1 && ctx.option_count() >= 1
}

pub(super) fn name_stock_combo(ctx: &ClassificationContext<'_>) -> StrategyName {
    let short_call = !ctx.short_calls().is_empty();
    let short_put = !ctx.short_puts().is_empty();
    let long_put = !ctx.long_puts().is_empty();

    match (short_call, short_put, long_put) {
        (true, true, _) => StrategyName::CoveredStrangle,
        (true, false, true) => StrategyName::Collar,
        (true, false, false) => StrategyName::CoveredCall,
        (false, true, _) => StrategyName::CoveredPut,
        (false, false, _) => StrategyName::StockCombo,
    }
}

// =============================================================================
// 6. Two legs across expirations
// =============================================================================

pub(super) fn is_multi_expiration_pair(ctx: &ClassificationContext<'_>) -> bool {
    ctx.is_options_only(2) && ctx.is_multi_exp()
}

pub(super) fn name_multi_expiration_pair(ctx: &ClassificationContext<'_>) -> StrategyName {
    let (Some(side), [first, second]) = (ctx.single_side(), ctx.options()) else {
        return StrategyName::MultiExpCombo;
    };

    if first.strike_or_zero() == second.strike_or_zero() {
        StrategyName::CalendarSpread(side)
    } else {
        StrategyName::DiagonalSpread(side)
    }
}

// =============================================================================
// 7. Iron condor / fly
// =============================================================================

pub(super) fn is_iron_condor(ctx: &ClassificationContext<'_>) -> bool {
    ctx.is_options_only(4)
        && ctx.short_calls().count() == 1
        && ctx.long_calls().count() == 1
        && ctx.short_puts().count() == 1
        && ctx.long_puts().count() == 1
}

pub(super) fn name_iron_condor(ctx: &ClassificationContext<'_>) -> StrategyName {
    let short_call = ctx.short_calls().lowest_strike();
    let long_call = ctx.long_calls().lowest_strike();
    let short_put = ctx.short_puts().lowest_strike();
    let long_put = ctx.long_puts().lowest_strike();

    if short_call == short_put {
        return StrategyName::IronFly;
    }

    let call_width = (long_call - short_call).abs();
    let put_width = (short_put - long_put).abs();
    if call_width == put_width {
        StrategyName::IronCondor
    } else {
        StrategyName::DynamicWidthIronCondor
    }
}

// =============================================================================
// 8. Butterfly
// =============================================================================

/// Wing widths (lower, upper) when the legs form long-short...-long with
/// ascending strikes.
fn butterfly_wings(ctx: &ClassificationContext<'_>) -> Option<(Decimal, Decimal)> {
    let mut legs: Vec<&Leg> = ctx.options().to_vec();
    legs.sort_by_key(|leg| leg.strike_or_zero());

    let (lower, rest) = legs.split_first()?;
    let (upper, body) = rest.split_last()?;
    let (body_low, body_high) = (body.first()?, body.last()?);

    let shape = lower.direction().is_long()
        && upper.direction().is_long()
        && body.iter().all(|leg| leg.is_short())
        && lower.strike_or_zero() < body_low.strike_or_zero()
        && body_high.strike_or_zero() < upper.strike_or_zero();

    shape.then(|| {
        (
            body_low.strike_or_zero() - lower.strike_or_zero(),
            upper.strike_or_zero() - body_high.strike_or_zero(),
        )
    })
}

pub(super) fn is_butterfly(ctx: &ClassificationContext<'_>) -> bool {
    (3..=4).contains(&ctx.leg_count())
        && ctx.option_count() == ctx.leg_count()
        && ctx.single_side().is_some()
        && ctx.net_option_quantity().is_zero()
        && butterfly_wings(ctx).is_some()
}

pub(super) fn name_butterfly(ctx: &ClassificationContext<'_>) -> StrategyName {
    match (ctx.single_side(), butterfly_wings(ctx)) {
        (Some(side), Some((lower, upper))) if lower == upper => StrategyName::Butterfly(side),
        (Some(side), Some(_)) => StrategyName::BrokenWingButterfly(side),
        _ => StrategyName::CustomCombo,
    }
}

// =============================================================================
// 9. Lizards
// =============================================================================

/// Short put + short call vertical (long call above the short call).
fn is_jade_shape(ctx: &ClassificationContext<'_>) -> bool {
    ctx.short_puts().count() == 1
        && ctx.long_puts().is_empty()
        && ctx.short_calls().count() == 1
        && ctx.long_calls().count() == 1
        && ctx.long_calls().lowest_strike() > ctx.short_calls().lowest_strike()
}

/// Short call + short put vertical (long put below the short put).
fn is_reverse_jade_shape(ctx: &ClassificationContext<'_>) -> bool {
    ctx.short_calls().count() == 1
        && ctx.long_calls().is_empty()
        && ctx.short_puts().count() == 1
        && ctx.long_puts().count() == 1
        && ctx.long_puts().lowest_strike() < ctx.short_puts().lowest_strike()
}

pub(super) fn is_lizard(ctx: &ClassificationContext<'_>) -> bool {
    ctx.is_options_only(3) && (is_jade_shape(ctx) || is_reverse_jade_shape(ctx))
}

pub(super) fn name_lizard(ctx: &ClassificationContext<'_>) -> StrategyName {
    let spot = ctx.underlying_price();
    let spot_known = spot > Decimal::ZERO;

    if is_jade_shape(ctx) {
        if spot_known && ctx.short_puts().lowest_strike() >= spot {
            StrategyName::BigLizard
        } else {
            StrategyName::JadeLizard
        }
    } else if spot_known && ctx.short_calls().lowest_strike() <= spot {
        StrategyName::ReverseBigLizard
    } else {
        StrategyName::ReverseJadeLizard
    }
}

// =============================================================================
// 10. Ratio spreads
// =============================================================================

pub(super) fn is_ratio(ctx: &ClassificationContext<'_>) -> bool {
    let [first, second] = ctx.options() else {
        return false;
    };
    ctx.is_options_only(2)
        && ctx.single_side().is_some()
        && first.abs_quantity() != second.abs_quantity()
}

pub(super) fn name_ratio(ctx: &ClassificationContext<'_>) -> StrategyName {
    let Some(side) = ctx.single_side() else {
        return StrategyName::CustomCombo;
    };

    let short = ctx.bucket(side, PositionDirection::Short);
    let long = ctx.bucket(side, PositionDirection::Long);
    let two_for_one = short.count() == 1
        && long.count() == 1
        && short.quantity().checked_mul(Decimal::TWO) == Some(long.quantity());

    if two_for_one {
        StrategyName::Zebra(side)
    } else {
        StrategyName::RatioSpread(side)
    }
}
