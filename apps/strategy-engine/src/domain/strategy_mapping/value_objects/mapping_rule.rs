//! Mapping Rule Value Object

use serde::{Deserialize, Serialize};

use super::{CostDirection, StrategyId};
use crate::domain::position::OptionSide;

/// How a rule matches the strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamePattern {
    /// Name equals the pattern.
    Exact(String),
    /// Name contains the pattern.
    Contains(String),
    /// Name contains at least one of the patterns.
    ContainsAny(Vec<String>),
    /// Name contains every pattern.
    ContainsAll(Vec<String>),
}

impl NamePattern {
    /// Check the pattern against a strategy name.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(pattern) => name == pattern,
            Self::Contains(pattern) => name.contains(pattern.as_str()),
            Self::ContainsAny(patterns) => patterns.iter().any(|p| name.contains(p.as_str())),
            Self::ContainsAll(patterns) => patterns.iter().all(|p| name.contains(p.as_str())),
        }
    }

    /// Patterns carried by this matcher.
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        match self {
            Self::Exact(pattern) | Self::Contains(pattern) => vec![pattern.as_str()],
            Self::ContainsAny(patterns) | Self::ContainsAll(patterns) => {
                patterns.iter().map(String::as_str).collect()
            }
        }
    }
}

/// One row of the strategy-id table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRule {
    /// Name matcher.
    pub name: NamePattern,
    /// Only match names mentioning this side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<OptionSide>,
    /// Only match clusters opened in this direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<CostDirection>,
    /// Identifier produced on match.
    pub id: StrategyId,
}

impl MappingRule {
    /// Create an unfiltered rule.
    #[must_use]
    pub fn new(name: NamePattern, id: impl Into<StrategyId>) -> Self {
        Self {
            name,
            side: None,
            direction: None,
            id: id.into(),
        }
    }

    /// Restrict the rule to one side.
    #[must_use]
    pub const fn for_side(mut self, side: OptionSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Restrict the rule to credit or debit positions.
    #[must_use]
    pub const fn for_direction(mut self, direction: CostDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Check the rule against a name and cost direction.
    #[must_use]
    pub fn matches(&self, name: &str, direction: Option<CostDirection>) -> bool {
        self.name.matches(name)
            && self.side.is_none_or(|side| side_mentioned(name) == Some(side))
            && self.direction.is_none_or(|wanted| direction == Some(wanted))
    }
}

/// Side keyword appearing in a strategy name.
fn side_mentioned(name: &str) -> Option<OptionSide> {
    if name.contains("Put") {
        Some(OptionSide::Put)
    } else if name.contains("Call") {
        Some(OptionSide::Call)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_kinds() {
        assert!(NamePattern::Exact("Iron Fly".into()).matches("Iron Fly"));
        assert!(!NamePattern::Exact("Iron Fly".into()).matches("Iron Fly Wide"));
        assert!(NamePattern::Contains("Condor".into()).matches("Dynamic Width Iron Condor"));
        assert!(
            NamePattern::ContainsAny(vec!["Jade".into(), "Big".into()]).matches("Big Lizard")
        );
        assert!(
            !NamePattern::ContainsAll(vec!["Reverse".into(), "Lizard".into()])
                .matches("Jade Lizard")
        );
    }

    #[test]
    fn side_filter_reads_name() {
        let rule = MappingRule::new(NamePattern::Contains("Vertical".into()), "x")
            .for_side(OptionSide::Put);
        assert!(rule.matches("Vertical Spread (Put)", None));
        assert!(!rule.matches("Vertical Spread (Call)", None));
    }

    #[test]
    fn direction_filter_requires_known_direction() {
        let rule = MappingRule::new(NamePattern::Contains("Vertical".into()), "x")
            .for_direction(CostDirection::Credit);
        assert!(rule.matches("Vertical Spread (Put)", Some(CostDirection::Credit)));
        assert!(!rule.matches("Vertical Spread (Put)", Some(CostDirection::Debit)));
        assert!(!rule.matches("Vertical Spread (Put)", None));
    }

    #[test]
    fn yaml_round_trip_shape() {
        let yaml = r#"
name:
  contains_all: ["Reverse", "Lizard"]
direction: credit
id: reverse_jade_lizard
"#;
        let rule: MappingRule = serde_yaml_bw::from_str(yaml).unwrap();
        assert_eq!(
            rule.name,
            NamePattern::ContainsAll(vec!["Reverse".into(), "Lizard".into()])
        );
        assert_eq!(rule.direction, Some(CostDirection::Credit));
        assert_eq!(rule.side, None);
        assert_eq!(rule.id.as_str(), "reverse_jade_lizard");
    }
}
