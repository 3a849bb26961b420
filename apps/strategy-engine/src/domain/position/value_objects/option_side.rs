//! Option Side Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Option side (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionSide {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl OptionSide {
    /// Normalize a broker "Call/Put" cell.
    ///
    /// Case-insensitive `Call`/`C` and `Put`/`P`; anything else is unset.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "CALL" | "C" => Some(Self::Call),
            "PUT" | "P" => Some(Self::Put),
            _ => None,
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "Call"),
            Self::Put => write!(f, "Put"),
        }
    }
}
