//! Built-in strategy-id table. First matching row wins.

use crate::domain::position::OptionSide::{Call, Put};
use crate::domain::strategy_mapping::value_objects::CostDirection::{Credit, Debit};
use crate::domain::strategy_mapping::value_objects::{MappingRule, NamePattern};

fn exact(name: &str, id: &str) -> MappingRule {
    MappingRule::new(NamePattern::Exact(name.to_string()), id)
}

fn contains(pattern: &str, id: &str) -> MappingRule {
    MappingRule::new(NamePattern::Contains(pattern.to_string()), id)
}

fn contains_any(patterns: &[&str], id: &str) -> MappingRule {
    MappingRule::new(
        NamePattern::ContainsAny(patterns.iter().map(|p| (*p).to_string()).collect()),
        id,
    )
}

fn contains_all(patterns: &[&str], id: &str) -> MappingRule {
    MappingRule::new(
        NamePattern::ContainsAll(patterns.iter().map(|p| (*p).to_string()).collect()),
        id,
    )
}

pub(super) fn default_rules() -> Vec<MappingRule> {
    vec![
        // Undefined-risk premium selling
        exact("Short Strangle", "short_strangle"),
        exact("Short Straddle", "short_straddle"),
        // Four-leg defined risk; "Iron Condor" also covers the dynamic-width variant
        contains("Iron Fly", "iron_fly"),
        contains("Iron Condor", "iron_condor"),
        // Lizards
        contains_all(&["Reverse", "Lizard"], "reverse_jade_lizard"),
        contains_any(&["Jade Lizard", "Big Lizard"], "jade_lizard"),
        // Verticals by side and direction
        contains("Vertical Spread", "short_call_vertical")
            .for_side(Call)
            .for_direction(Credit),
        contains("Vertical Spread", "short_put_vertical")
            .for_side(Put)
            .for_direction(Credit),
        contains("Vertical Spread", "long_call_vertical")
            .for_side(Call)
            .for_direction(Debit),
        contains("Vertical Spread", "long_put_vertical")
            .for_side(Put)
            .for_direction(Debit),
        // Time spreads
        contains("Calendar Spread", "calendar_spread"),
        // Keyed on cost direction only: any debit diagonal maps to the
        // poor man's covered id, whatever its strike and expiration order.
        contains("Diagonal Spread", "poor_mans_covered_call")
            .for_side(Call)
            .for_direction(Debit),
        contains("Diagonal Spread", "poor_mans_covered_put")
            .for_side(Put)
            .for_direction(Debit),
        contains("Diagonal Spread", "diagonal_spread"),
        // Stock-backed
        exact("Covered Strangle", "covered_strangle"),
        exact("Covered Call", "covered_call"),
        exact("Covered Put", "covered_put"),
        exact("Collar", "collar"),
        // Butterflies and ratios
        contains("Broken Wing", "broken_wing_butterfly"),
        contains("Butterfly", "butterfly"),
        contains("ZEBRA", "zebra"),
        contains("Ratio Spread", "ratio_spread"),
        // Single legs
        exact("Short Call", "short_call"),
        exact("Short Put", "short_put"),
        exact("Long Call", "long_call"),
        exact("Long Put", "long_put"),
        exact("Stock", "stock"),
    ]
}
