//! Position Leg Value Object

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AssetKind, LegGreeks, OptionSide};
use crate::domain::shared::Symbol;

/// Position direction (long or short), derived from the quantity sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionDirection {
    /// Long position (bought).
    Long,
    /// Short position (sold/written).
    Short,
}

impl PositionDirection {
    /// Direction of a signed quantity. Zero counts as long.
    #[must_use]
    pub fn of(quantity: Decimal) -> Self {
        if quantity.is_sign_negative() && !quantity.is_zero() {
            Self::Short
        } else {
            Self::Long
        }
    }

    /// Check if this is a short position.
    #[must_use]
    pub const fn is_short(&self) -> bool {
        matches!(self, Self::Short)
    }

    /// Check if this is a long position.
    #[must_use]
    pub const fn is_long(&self) -> bool {
        matches!(self, Self::Long)
    }
}

/// One normalized position row: a stock holding or an option contract.
///
/// Legs are immutable once built; the `with_*` methods are construction-time
/// builders. Serialize-only: `root` is always derived from `symbol`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leg {
    /// Broker symbol.
    symbol: Symbol,
    /// Root ticker, derived from the symbol.
    root: String,
    /// Stock or option.
    kind: AssetKind,
    /// Signed quantity (negative = short).
    quantity: Decimal,
    /// Strike price (options only).
    strike: Option<Decimal>,
    /// Expiration date (options only).
    expiration: Option<NaiveDate>,
    /// Call or put; `None` when the export left it blank.
    side: Option<OptionSide>,
    /// Date the position was opened.
    open_date: Option<NaiveDate>,
    /// Last price of the underlying.
    underlying_price: Decimal,
    /// Cost basis (negative = credit received).
    cost: Decimal,
    /// Open profit/loss.
    pnl_open: Decimal,
    /// Position Greeks.
    greeks: LegGreeks,
    /// Bid.
    bid: Decimal,
    /// Ask.
    ask: Decimal,
}

impl Leg {
    fn new(symbol: Symbol, kind: AssetKind, quantity: Decimal) -> Self {
        let root = symbol.root();
        Self {
            symbol,
            root,
            kind,
            quantity,
            strike: None,
            expiration: None,
            side: None,
            open_date: None,
            underlying_price: Decimal::ZERO,
            cost: Decimal::ZERO,
            pnl_open: Decimal::ZERO,
            greeks: LegGreeks::ZERO,
            bid: Decimal::ZERO,
            ask: Decimal::ZERO,
        }
    }

    /// Create a stock leg.
    #[must_use]
    pub fn stock(symbol: impl Into<Symbol>, quantity: Decimal) -> Self {
        Self::new(symbol.into(), AssetKind::Stock, quantity)
    }

    /// Create an option leg.
    #[must_use]
    pub fn option(
        symbol: impl Into<Symbol>,
        side: Option<OptionSide>,
        quantity: Decimal,
        strike: Decimal,
        expiration: Option<NaiveDate>,
    ) -> Self {
        let mut leg = Self::new(symbol.into(), AssetKind::Option, quantity);
        leg.side = side;
        leg.strike = Some(strike);
        leg.expiration = expiration;
        leg
    }

    /// Set the open date.
    #[must_use]
    pub const fn with_open_date(mut self, open_date: Option<NaiveDate>) -> Self {
        self.open_date = open_date;
        self
    }

    /// Set the underlying last price.
    #[must_use]
    pub const fn with_underlying_price(mut self, price: Decimal) -> Self {
        self.underlying_price = price;
        self
    }

    /// Set the cost basis.
    #[must_use]
    pub const fn with_cost(mut self, cost: Decimal) -> Self {
        self.cost = cost;
        self
    }

    /// Set the open P/L.
    #[must_use]
    pub const fn with_pnl_open(mut self, pnl_open: Decimal) -> Self {
        self.pnl_open = pnl_open;
        self
    }

    /// Set the Greeks.
    #[must_use]
    pub const fn with_greeks(mut self, greeks: LegGreeks) -> Self {
        self.greeks = greeks;
        self
    }

    /// Set the bid/ask quote.
    #[must_use]
    pub const fn with_quote(mut self, bid: Decimal, ask: Decimal) -> Self {
        self.bid = bid;
        self.ask = ask;
        self
    }

    /// Get the symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Get the root ticker.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Get the asset kind.
    #[must_use]
    pub const fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Get the signed quantity.
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Absolute quantity.
    #[must_use]
    pub fn abs_quantity(&self) -> Decimal {
        self.quantity.abs()
    }

    /// Get the strike, if any.
    #[must_use]
    pub const fn strike(&self) -> Option<Decimal> {
        self.strike
    }

    /// Strike for comparisons; missing strikes compare as zero.
    #[must_use]
    pub fn strike_or_zero(&self) -> Decimal {
        self.strike.unwrap_or(Decimal::ZERO)
    }

    /// Get the expiration date.
    #[must_use]
    pub const fn expiration(&self) -> Option<NaiveDate> {
        self.expiration
    }

    /// Get the option side.
    #[must_use]
    pub const fn side(&self) -> Option<OptionSide> {
        self.side
    }

    /// Get the open date.
    #[must_use]
    pub const fn open_date(&self) -> Option<NaiveDate> {
        self.open_date
    }

    /// Get the underlying last price.
    #[must_use]
    pub const fn underlying_price(&self) -> Decimal {
        self.underlying_price
    }

    /// Get the cost basis.
    #[must_use]
    pub const fn cost(&self) -> Decimal {
        self.cost
    }

    /// Get the open P/L.
    #[must_use]
    pub const fn pnl_open(&self) -> Decimal {
        self.pnl_open
    }

    /// Get the Greeks.
    #[must_use]
    pub const fn greeks(&self) -> &LegGreeks {
        &self.greeks
    }

    /// Get the bid.
    #[must_use]
    pub const fn bid(&self) -> Decimal {
        self.bid
    }

    /// Get the ask.
    #[must_use]
    pub const fn ask(&self) -> Decimal {
        self.ask
    }

    /// Midpoint of bid and ask.
    #[must_use]
    pub fn mid(&self) -> Decimal {
        self.bid.saturating_add(self.ask) / Decimal::TWO
    }

    /// Long or short.
    #[must_use]
    pub fn direction(&self) -> PositionDirection {
        PositionDirection::of(self.quantity)
    }

    /// Check if this is a short leg.
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.direction().is_short()
    }

    /// Check if this is a stock leg.
    #[must_use]
    pub const fn is_stock(&self) -> bool {
        self.kind.is_stock()
    }

    /// Check if this is an option leg.
    #[must_use]
    pub const fn is_option(&self) -> bool {
        self.kind.is_option()
    }

    /// Days from `as_of` until expiration.
    #[must_use]
    pub fn dte(&self, as_of: NaiveDate) -> Option<i64> {
        self.expiration.map(|exp| (exp - as_of).num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn expiration() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
    }

    #[test]
    fn direction_from_quantity_sign() {
        assert_eq!(PositionDirection::of(dec!(-1)), PositionDirection::Short);
        assert_eq!(PositionDirection::of(dec!(2)), PositionDirection::Long);
        assert_eq!(PositionDirection::of(Decimal::ZERO), PositionDirection::Long);
        assert_eq!(PositionDirection::of(dec!(-0)), PositionDirection::Long);
    }

    #[test]
    fn stock_leg_has_no_contract_fields() {
        let leg = Leg::stock("aapl", dec!(100));

        assert!(leg.is_stock());
        assert_eq!(leg.root(), "AAPL");
        assert_eq!(leg.strike(), None);
        assert_eq!(leg.expiration(), None);
        assert_eq!(leg.side(), None);
        assert_eq!(leg.strike_or_zero(), Decimal::ZERO);
    }

    #[test]
    fn option_leg_derives_root_and_direction() {
        let leg = Leg::option(
            "AAPL250117C00150000",
            Some(OptionSide::Call),
            dec!(-2),
            dec!(150),
            Some(expiration()),
        );

        assert!(leg.is_option());
        assert_eq!(leg.root(), "AAPL");
        assert!(leg.is_short());
        assert_eq!(leg.abs_quantity(), dec!(2));
        assert_eq!(leg.strike(), Some(dec!(150)));
    }

    #[test]
    fn builders_set_optional_fields() {
        let open = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let leg = Leg::option("SPY", Some(OptionSide::Put), dec!(1), dec!(450), None)
            .with_open_date(Some(open))
            .with_underlying_price(dec!(471.20))
            .with_cost(dec!(-125))
            .with_pnl_open(dec!(40))
            .with_quote(dec!(1.10), dec!(1.30));

        assert_eq!(leg.open_date(), Some(open));
        assert_eq!(leg.underlying_price(), dec!(471.20));
        assert_eq!(leg.cost(), dec!(-125));
        assert_eq!(leg.pnl_open(), dec!(40));
        assert_eq!(leg.mid(), dec!(1.20));
    }

    #[test]
    fn serialized_root_matches_symbol() {
        let leg = Leg::option(
            "spy250117p00450000",
            Some(OptionSide::Put),
            dec!(-1),
            dec!(450),
            Some(expiration()),
        );

        let value = serde_json::to_value(&leg).unwrap();
        assert_eq!(value["root"], "SPY");
        assert_eq!(value["root"], leg.symbol().root().as_str());
    }

    #[test]
    fn dte_counts_calendar_days() {
        let leg = Leg::option("SPY", Some(OptionSide::Call), dec!(1), dec!(450), Some(expiration()));
        let as_of = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(leg.dte(as_of), Some(7));
        assert_eq!(Leg::stock("SPY", dec!(1)).dte(as_of), None);
    }
}
