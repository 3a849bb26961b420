//! Classifier Chain
//!
//! Ordered list of (guard, namer) rules evaluated top to bottom; the first
//! matching guard names the group. Order is part of the contract: narrower
//! shapes must precede the shapes that contain them.

use std::fmt;

use super::rules;
use crate::domain::classification::value_objects::{ClassificationContext, StrategyName};
use crate::domain::position::Leg;

type Guard = fn(&ClassificationContext<'_>) -> bool;
type Namer = fn(&ClassificationContext<'_>) -> StrategyName;

/// One classification rule.
#[derive(Clone, Copy)]
pub struct ClassifierRule {
    id: &'static str,
    guard: Guard,
    namer: Namer,
}

impl ClassifierRule {
    /// Create a rule from a guard and a namer.
    #[must_use]
    pub const fn new(id: &'static str, guard: Guard, namer: Namer) -> Self {
        Self { id, guard, namer }
    }

    /// Stable rule identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Check whether the group has this rule's shape.
    #[must_use]
    pub fn matches(&self, ctx: &ClassificationContext<'_>) -> bool {
        (self.guard)(ctx)
    }

    /// Name a group that matched this rule.
    #[must_use]
    pub fn name(&self, ctx: &ClassificationContext<'_>) -> StrategyName {
        (self.namer)(ctx)
    }
}

impl fmt::Debug for ClassifierRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierRule").field("id", &self.id).finish()
    }
}

/// Outcome of classifying one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Strategy name.
    pub name: StrategyName,
    /// Rule that produced the name; `None` for `Empty` and the
    /// `Custom/Combo` fallback.
    pub rule: Option<&'static str>,
}

/// Immutable, stateless classifier chain.
///
/// Build once at startup and share by reference (or `Arc`).
#[derive(Debug, Clone)]
pub struct ClassifierChain {
    rules: Vec<ClassifierRule>,
}

impl ClassifierChain {
    /// Chain over an explicit rule list, evaluated in order.
    #[must_use]
    pub const fn new(rules: Vec<ClassifierRule>) -> Self {
        Self { rules }
    }

    /// The standard rule order.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            ClassifierRule::new("stock", rules::is_stock, rules::name_stock),
            ClassifierRule::new(
                "single_option",
                rules::is_single_option,
                rules::name_single_option,
            ),
            ClassifierRule::new(
                "short_straddle_strangle",
                rules::is_short_premium_pair,
                rules::name_short_premium_pair,
            ),
            ClassifierRule::new("vertical", rules::is_vertical, rules::name_vertical),
            ClassifierRule::new("stock_combo", rules::is_stock_combo, rules::name_stock_combo),
            ClassifierRule::new(
                "multi_expiration",
                rules::is_multi_expiration_pair,
                rules::name_multi_expiration_pair,
            ),
            ClassifierRule::new("iron_condor", rules::is_iron_condor, rules::name_iron_condor),
            ClassifierRule::new("butterfly", rules::is_butterfly, rules::name_butterfly),
            ClassifierRule::new("lizard", rules::is_lizard, rules::name_lizard),
            ClassifierRule::new("ratio", rules::is_ratio, rules::name_ratio),
        ])
    }

    /// Rule identifiers in evaluation order.
    pub fn rule_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(ClassifierRule::id)
    }

    /// Name a group of legs.
    #[must_use]
    pub fn classify(&self, legs: &[&Leg]) -> StrategyName {
        self.explain(legs).name
    }

    /// Name a group of legs and report which rule fired.
    #[must_use]
    pub fn explain(&self, legs: &[&Leg]) -> Classification {
        if legs.is_empty() {
            return Classification {
                name: StrategyName::Empty,
                rule: None,
            };
        }

        let ctx = ClassificationContext::new(legs);
        self.rules
            .iter()
            .find(|rule| rule.matches(&ctx))
            .map_or(
                Classification {
                    name: StrategyName::CustomCombo,
                    rule: None,
                },
                |rule| Classification {
                    name: rule.name(&ctx),
                    rule: Some(rule.id()),
                },
            )
    }
}

impl Default for ClassifierChain {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::position::OptionSide;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    const CALL: Option<OptionSide> = Some(OptionSide::Call);
    const PUT: Option<OptionSide> = Some(OptionSide::Put);

    fn exp_a() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 3, 21)
    }

    fn exp_b() -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(2025, 4, 17)
    }

    fn opt(side: Option<OptionSide>, qty: i64, strike: i64) -> Leg {
        Leg::option("XYZ", side, Decimal::from(qty), Decimal::from(strike), exp_a())
    }

    fn opt_exp(side: Option<OptionSide>, qty: i64, strike: i64, exp: Option<NaiveDate>) -> Leg {
        Leg::option("XYZ", side, Decimal::from(qty), Decimal::from(strike), exp)
    }

    fn stock(qty: i64) -> Leg {
        Leg::stock("XYZ", Decimal::from(qty))
    }

    fn name_of(legs: &[Leg]) -> String {
        let refs: Vec<&Leg> = legs.iter().collect();
        ClassifierChain::standard().classify(&refs).to_string()
    }

    #[test]
    fn empty_group() {
        let chain = ClassifierChain::standard();
        let result = chain.explain(&[]);
        assert_eq!(result.name, StrategyName::Empty);
        assert_eq!(result.rule, None);
    }

    #[test]
    fn rule_order_is_fixed() {
        let ids: Vec<_> = ClassifierChain::standard().rule_ids().collect();
        assert_eq!(
            ids,
            vec![
                "stock",
                "single_option",
                "short_straddle_strangle",
                "vertical",
                "stock_combo",
                "multi_expiration",
                "iron_condor",
                "butterfly",
                "lizard",
                "ratio",
            ]
        );
    }

    #[test]
    fn single_legs() {
        assert_eq!(name_of(&[stock(100)]), "Stock");
        assert_eq!(name_of(&[opt(CALL, 1, 100)]), "Long Call");
        assert_eq!(name_of(&[opt(CALL, -1, 100)]), "Short Call");
        assert_eq!(name_of(&[opt(PUT, 3, 90)]), "Long Put");
        assert_eq!(name_of(&[opt(PUT, -1, 90)]), "Short Put");
        assert_eq!(name_of(&[opt(None, -1, 90)]), "Single Option (Unknown Type)");
    }

    #[test_case(110, 90, "Short Strangle" ; "different strikes")]
    #[test_case(100, 100, "Short Straddle" ; "same strike")]
    fn short_premium_pairs(call_strike: i64, put_strike: i64, expected: &str) {
        let legs = [opt(CALL, -1, call_strike), opt(PUT, -1, put_strike)];
        assert_eq!(name_of(&legs), expected);
    }

    #[test]
    fn strike_equality_ignores_decimal_scale() {
        let legs = [
            Leg::option("XYZ", CALL, dec!(-1), dec!(100.00), exp_a()),
            Leg::option("XYZ", PUT, dec!(-1), dec!(100), exp_a()),
        ];
        assert_eq!(name_of(&legs), "Short Straddle");
    }

    #[test]
    fn verticals() {
        assert_eq!(
            name_of(&[opt(CALL, -1, 110), opt(CALL, 1, 120)]),
            "Vertical Spread (Call)"
        );
        assert_eq!(
            name_of(&[opt(PUT, 2, 95), opt(PUT, -2, 90)]),
            "Vertical Spread (Put)"
        );
    }

    #[test]
    fn stock_pairs() {
        assert_eq!(name_of(&[stock(100), opt(CALL, -1, 110)]), "Covered Call");
        assert_eq!(name_of(&[stock(-100), opt(PUT, -1, 90)]), "Covered Put");
    }

    #[test]
    fn stock_triples() {
        assert_eq!(
            name_of(&[stock(100), opt(CALL, -1, 110), opt(PUT, -1, 90)]),
            "Covered Strangle"
        );
        assert_eq!(
            name_of(&[stock(100), opt(PUT, 1, 90), opt(CALL, -1, 110)]),
            "Collar"
        );
        assert_eq!(
            name_of(&[stock(100), opt(CALL, 1, 110)]),
            "Custom/Combo (Stock)"
        );
    }

    #[test]
    fn calendar_and_diagonal() {
        let calendar = [
            opt_exp(CALL, -1, 100, exp_a()),
            opt_exp(CALL, 1, 100, exp_b()),
        ];
        assert_eq!(name_of(&calendar), "Calendar Spread (Call)");

        let diagonal = [
            opt_exp(CALL, -1, 105, exp_a()),
            opt_exp(CALL, 1, 100, exp_b()),
        ];
        assert_eq!(name_of(&diagonal), "Diagonal Spread (Call)");

        let put_diagonal = [
            opt_exp(PUT, -1, 95, exp_a()),
            opt_exp(PUT, 1, 90, exp_b()),
        ];
        assert_eq!(name_of(&put_diagonal), "Diagonal Spread (Put)");
    }

    #[test]
    fn mixed_sides_across_expirations() {
        let legs = [opt_exp(CALL, 1, 100, exp_a()), opt_exp(PUT, 1, 100, exp_b())];
        assert_eq!(name_of(&legs), "Multi-Exp Combo");
    }

    #[test]
    fn short_strangle_across_expirations_stays_strangle() {
        let legs = [opt_exp(CALL, -1, 110, exp_a()), opt_exp(PUT, -1, 90, exp_b())];
        assert_eq!(name_of(&legs), "Short Strangle");
    }

    #[test]
    fn iron_condor_family() {
        let condor = [
            opt(CALL, -1, 110),
            opt(CALL, 1, 120),
            opt(PUT, -1, 90),
            opt(PUT, 1, 80),
        ];
        assert_eq!(name_of(&condor), "Iron Condor");

        let fly = [
            opt(CALL, -1, 100),
            opt(CALL, 1, 110),
            opt(PUT, -1, 100),
            opt(PUT, 1, 90),
        ];
        assert_eq!(name_of(&fly), "Iron Fly");

        let dynamic = [
            opt(CALL, -1, 110),
            opt(CALL, 1, 115),
            opt(PUT, -1, 90),
            opt(PUT, 1, 80),
        ];
        assert_eq!(name_of(&dynamic), "Dynamic Width Iron Condor");
    }

    #[test]
    fn butterflies() {
        let symmetric = [opt(CALL, 1, 90), opt(CALL, -2, 100), opt(CALL, 1, 110)];
        assert_eq!(name_of(&symmetric), "Call Butterfly");

        let broken = [opt(PUT, 1, 85), opt(PUT, -2, 100), opt(PUT, 1, 110)];
        assert_eq!(name_of(&broken), "Put Broken Wing/Heart Butterfly");

        let four_leg = [
            opt(PUT, 1, 80),
            opt(PUT, -1, 90),
            opt(PUT, -1, 90),
            opt(PUT, 1, 100),
        ];
        assert_eq!(name_of(&four_leg), "Put Butterfly");
    }

    #[test]
    fn unbalanced_single_side_triple_is_custom() {
        let legs = [opt(CALL, 1, 90), opt(CALL, -1, 100), opt(CALL, 1, 110)];
        assert_eq!(name_of(&legs), "Custom/Combo");
    }

    #[test]
    fn lizards() {
        let jade = [opt(PUT, -1, 90), opt(CALL, -1, 110), opt(CALL, 1, 120)];
        assert_eq!(name_of(&jade), "Jade Lizard");

        let reverse = [opt(CALL, -1, 110), opt(PUT, -1, 90), opt(PUT, 1, 80)];
        assert_eq!(name_of(&reverse), "Reverse Jade Lizard");
    }

    #[test]
    fn big_lizards_need_known_spot() {
        let big = [
            opt(PUT, -1, 100).with_underlying_price(dec!(100)),
            opt(CALL, -1, 100),
            opt(CALL, 1, 105),
        ];
        assert_eq!(name_of(&big), "Big Lizard");

        let reverse_big = [
            opt(CALL, -1, 100).with_underlying_price(dec!(101)),
            opt(PUT, -1, 100),
            opt(PUT, 1, 95),
        ];
        assert_eq!(name_of(&reverse_big), "Reverse Big Lizard");
    }

    #[test]
    fn ratio_spreads() {
        assert_eq!(name_of(&[opt(CALL, 2, 90), opt(CALL, -1, 100)]), "Call ZEBRA");
        assert_eq!(
            name_of(&[opt(PUT, 1, 100), opt(PUT, -2, 90)]),
            "Ratio Spread (Put)"
        );
        assert_eq!(
            name_of(&[opt(CALL, -1, 100), opt(CALL, -3, 110)]),
            "Ratio Spread (Call)"
        );
    }

    #[test]
    fn unset_side_degrades_to_fallback() {
        let legs = [opt(None, -1, 110), opt(PUT, -1, 90)];
        let refs: Vec<&Leg> = legs.iter().collect();
        let result = ClassifierChain::standard().explain(&refs);
        assert_eq!(result.name, StrategyName::CustomCombo);
        assert_eq!(result.rule, None);
    }

    #[test]
    fn explain_reports_matching_rule() {
        let legs = [opt(PUT, -1, 90), opt(CALL, -1, 110), opt(CALL, 1, 120)];
        let refs: Vec<&Leg> = legs.iter().collect();
        let result = ClassifierChain::standard().explain(&refs);
        assert_eq!(result.name, StrategyName::JadeLizard);
        assert_eq!(result.rule, Some("lizard"));
    }

    #[test]
    fn custom_chain_uses_given_order() {
        let chain = ClassifierChain::new(vec![ClassifierRule::new(
            "anything",
            |_| true,
            |_| StrategyName::CustomCombo,
        )]);
        let legs = [stock(100)];
        let refs: Vec<&Leg> = legs.iter().collect();
        assert_eq!(chain.explain(&refs).rule, Some("anything"));
    }
}
