//! Strategy ID Mapper

use super::default_rules::default_rules;
use crate::domain::strategy_mapping::value_objects::{CostDirection, MappingRule, StrategyId};

/// Ordered strategy-id table. First matching row wins; no match means the
/// strategy has no specific triage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyIdMapper {
    rules: Vec<MappingRule>,
}

impl StrategyIdMapper {
    /// Mapper over an explicit table.
    #[must_use]
    pub const fn new(rules: Vec<MappingRule>) -> Self {
        Self { rules }
    }

    /// Mapper over the built-in table.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(default_rules())
    }

    /// The table rows in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    /// Map a strategy name and cost direction to an identifier.
    #[must_use]
    pub fn map(&self, name: &str, direction: Option<CostDirection>) -> Option<&StrategyId> {
        self.rules
            .iter()
            .find(|rule| rule.matches(name, direction))
            .map(|rule| &rule.id)
    }
}

impl Default for StrategyIdMapper {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::strategy_mapping::value_objects::NamePattern;
    use test_case::test_case;

    fn id(name: &str, direction: Option<CostDirection>) -> Option<String> {
        StrategyIdMapper::standard()
            .map(name, direction)
            .map(|id| id.as_str().to_string())
    }

    #[test_case("Short Strangle", None, Some("short_strangle"))]
    #[test_case("Short Straddle", Some(CostDirection::Credit), Some("short_straddle"))]
    #[test_case("Iron Fly", None, Some("iron_fly"))]
    #[test_case("Dynamic Width Iron Condor", None, Some("iron_condor"))]
    #[test_case("Reverse Big Lizard", None, Some("reverse_jade_lizard"))]
    #[test_case("Big Lizard", None, Some("jade_lizard"))]
    #[test_case("Vertical Spread (Put)", Some(CostDirection::Credit), Some("short_put_vertical"))]
    #[test_case("Vertical Spread (Call)", Some(CostDirection::Debit), Some("long_call_vertical"))]
    #[test_case("Vertical Spread (Call)", None, None)]
    #[test_case("Calendar Spread (Put)", Some(CostDirection::Debit), Some("calendar_spread"))]
    #[test_case("Diagonal Spread (Call)", Some(CostDirection::Debit), Some("poor_mans_covered_call"))]
    #[test_case("Diagonal Spread (Put)", Some(CostDirection::Credit), Some("diagonal_spread"))]
    #[test_case("Covered Call", None, Some("covered_call"))]
    #[test_case("Call Broken Wing/Heart Butterfly", None, Some("broken_wing_butterfly"))]
    #[test_case("Put Butterfly", None, Some("butterfly"))]
    #[test_case("Call ZEBRA", None, Some("zebra"))]
    #[test_case("Short Put", None, Some("short_put"))]
    #[test_case("Stock", None, Some("stock"))]
    #[test_case("Custom/Combo", None, None)]
    #[test_case("Multi-Exp Combo", None, None)]
    #[test_case("Single Option (Unknown Type)", None, None)]
    fn standard_table(name: &str, direction: Option<CostDirection>, expected: Option<&str>) {
        assert_eq!(id(name, direction).as_deref(), expected);
    }

    #[test]
    fn first_matching_row_wins() {
        let mapper = StrategyIdMapper::new(vec![
            MappingRule::new(NamePattern::Contains("Lizard".into()), "any_lizard"),
            MappingRule::new(NamePattern::Exact("Jade Lizard".into()), "jade"),
        ]);
        assert_eq!(
            mapper.map("Jade Lizard", None).map(StrategyId::as_str),
            Some("any_lizard")
        );
    }

    #[test]
    fn empty_table_maps_nothing() {
        let mapper = StrategyIdMapper::new(Vec::new());
        assert!(mapper.map("Iron Condor", None).is_none());
        assert!(mapper.rules().is_empty());
    }
}
