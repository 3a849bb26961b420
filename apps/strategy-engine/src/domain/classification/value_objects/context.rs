//! Classification Context
//!
//! Derived, read-only aggregation over one candidate group of legs. Built
//! once per classification attempt and shared by every rule tried against
//! that group.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::domain::position::{Leg, OptionSide, PositionDirection};

/// Option legs of one (side, direction) pair.
#[derive(Debug, Clone, Default)]
pub struct LegBucket<'a> {
    legs: Vec<&'a Leg>,
    quantity: Decimal,
    strikes: Vec<Decimal>,
}

impl<'a> LegBucket<'a> {
    fn push(&mut self, leg: &'a Leg) {
        self.legs.push(leg);
        self.quantity = self.quantity.saturating_add(leg.abs_quantity());
        self.strikes.push(leg.strike_or_zero());
    }

    fn finish(mut self) -> Self {
        self.strikes.sort();
        self
    }

    /// Legs in group order.
    #[must_use]
    pub fn legs(&self) -> &[&'a Leg] {
        &self.legs
    }

    /// Number of legs.
    #[must_use]
    pub fn count(&self) -> usize {
        self.legs.len()
    }

    /// Check if the bucket holds no legs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Summed absolute quantity.
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Strikes in ascending order.
    #[must_use]
    pub fn strikes(&self) -> &[Decimal] {
        &self.strikes
    }

    /// Lowest strike, zero when empty.
    #[must_use]
    pub fn lowest_strike(&self) -> Decimal {
        self.strikes.first().copied().unwrap_or(Decimal::ZERO)
    }
}

/// Aggregated view of a candidate group.
#[derive(Debug, Clone)]
pub struct ClassificationContext<'a> {
    leg_count: usize,
    stock: Vec<&'a Leg>,
    options: Vec<&'a Leg>,
    short_calls: LegBucket<'a>,
    long_calls: LegBucket<'a>,
    short_puts: LegBucket<'a>,
    long_puts: LegBucket<'a>,
    is_multi_exp: bool,
    underlying_price: Decimal,
}

impl<'a> ClassificationContext<'a> {
    /// Build the context for a group of legs.
    #[must_use]
    pub fn new(legs: &[&'a Leg]) -> Self {
        let mut stock = Vec::new();
        let mut options = Vec::new();
        let mut short_calls = LegBucket::default();
        let mut long_calls = LegBucket::default();
        let mut short_puts = LegBucket::default();
        let mut long_puts = LegBucket::default();

        for &leg in legs {
            if leg.is_stock() {
                stock.push(leg);
                continue;
            }
            options.push(leg);

            let bucket = match (leg.side(), leg.direction()) {
                (Some(OptionSide::Call), PositionDirection::Short) => &mut short_calls,
                (Some(OptionSide::Call), PositionDirection::Long) => &mut long_calls,
                (Some(OptionSide::Put), PositionDirection::Short) => &mut short_puts,
                (Some(OptionSide::Put), PositionDirection::Long) => &mut long_puts,
                (None, _) => continue,
            };
            bucket.push(leg);
        }

        let expirations: BTreeSet<_> = legs.iter().filter_map(|leg| leg.expiration()).collect();

        let underlying_price = legs
            .iter()
            .map(|leg| leg.underlying_price())
            .find(|price| *price > Decimal::ZERO)
            .unwrap_or(Decimal::ZERO);

        Self {
            leg_count: legs.len(),
            stock,
            options,
            short_calls: short_calls.finish(),
            long_calls: long_calls.finish(),
            short_puts: short_puts.finish(),
            long_puts: long_puts.finish(),
            is_multi_exp: expirations.len() > 1,
            underlying_price,
        }
    }

    /// Total number of legs in the group.
    #[must_use]
    pub const fn leg_count(&self) -> usize {
        self.leg_count
    }

    /// Stock legs.
    #[must_use]
    pub fn stock(&self) -> &[&'a Leg] {
        &self.stock
    }

    /// Option legs, including those with an unset side.
    #[must_use]
    pub fn options(&self) -> &[&'a Leg] {
        &self.options
    }

    /// Number of stock legs.
    #[must_use]
    pub fn stock_count(&self) -> usize {
        self.stock.len()
    }

    /// Number of option legs.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// Check if the group consists of exactly `n` option legs and nothing else.
    #[must_use]
    pub fn is_options_only(&self, n: usize) -> bool {
        self.leg_count == n && self.options.len() == n
    }

    /// Legs for a (side, direction) pair.
    #[must_use]
    pub const fn bucket(&self, side: OptionSide, direction: PositionDirection) -> &LegBucket<'a> {
        match (side, direction) {
            (OptionSide::Call, PositionDirection::Short) => &self.short_calls,
            (OptionSide::Call, PositionDirection::Long) => &self.long_calls,
            (OptionSide::Put, PositionDirection::Short) => &self.short_puts,
            (OptionSide::Put, PositionDirection::Long) => &self.long_puts,
        }
    }

    /// Short calls.
    #[must_use]
    pub const fn short_calls(&self) -> &LegBucket<'a> {
        &self.short_calls
    }

    /// Long calls.
    #[must_use]
    pub const fn long_calls(&self) -> &LegBucket<'a> {
        &self.long_calls
    }

    /// Short puts.
    #[must_use]
    pub const fn short_puts(&self) -> &LegBucket<'a> {
        &self.short_puts
    }

    /// Long puts.
    #[must_use]
    pub const fn long_puts(&self) -> &LegBucket<'a> {
        &self.long_puts
    }

    /// More than one distinct expiration among the legs.
    #[must_use]
    pub const fn is_multi_exp(&self) -> bool {
        self.is_multi_exp
    }

    /// Underlying price of the group (first positive value, else zero).
    #[must_use]
    pub const fn underlying_price(&self) -> Decimal {
        self.underlying_price
    }

    /// The side shared by every option leg, when all options have the same
    /// known side.
    #[must_use]
    pub fn single_side(&self) -> Option<OptionSide> {
        let mut sides = self.options.iter().map(|leg| leg.side());
        let first = sides.next()??;
        sides.all(|side| side == Some(first)).then_some(first)
    }

    /// Net signed quantity across option legs.
    #[must_use]
    pub fn net_option_quantity(&self) -> Decimal {
        self.options.iter().map(|leg| leg.quantity()).sum()
    }
}
