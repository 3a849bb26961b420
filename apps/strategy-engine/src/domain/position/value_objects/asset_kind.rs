//! Asset Kind Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of instrument held by a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Shares of the underlying.
    Stock,
    /// An option contract.
    Option,
}

impl AssetKind {
    /// Map a broker "Type" cell to an asset kind.
    ///
    /// `stock`, `equity`, `equities` and `equity stock` (any case) are stock,
    /// everything else is treated as an option.
    #[must_use]
    pub fn from_type_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "stock" | "equity" | "equities" | "equity stock" => Self::Stock,
            _ => Self::Option,
        }
    }

    /// Check if this is a stock leg.
    #[must_use]
    pub const fn is_stock(&self) -> bool {
        matches!(self, Self::Stock)
    }

    /// Check if this is an option leg.
    #[must_use]
    pub const fn is_option(&self) -> bool {
        matches!(self, Self::Option)
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stock => write!(f, "Stock"),
            Self::Option => write!(f, "Option"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("Stock" ; "capitalized")]
    #[test_case("EQUITY" ; "upper equity")]
    #[test_case("equities" ; "plural")]
    #[test_case(" Equity Stock " ; "padded two words")]
    fn stock_labels(label: &str) {
        assert_eq!(AssetKind::from_type_label(label), AssetKind::Stock);
    }

    #[test_case("Equity Option" ; "equity option")]
    #[test_case("OPTION" ; "option")]
    #[test_case("" ; "empty")]
    #[test_case("Future" ; "future")]
    fn option_labels(label: &str) {
        assert_eq!(AssetKind::from_type_label(label), AssetKind::Option);
    }

    #[test]
    fn predicates() {
        assert!(AssetKind::Stock.is_stock());
        assert!(AssetKind::Option.is_option());
        assert!(!AssetKind::Option.is_stock());
    }
}
