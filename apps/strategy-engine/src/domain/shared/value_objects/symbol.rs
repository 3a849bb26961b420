//! Symbol value object for position identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Matches an OCC-style contract suffix glued to the root: `YYMMDD` + `C|P` + strike.
#[allow(clippy::expect_used)] // Pattern is a compile-time constant
fn occ_suffix() -> &'static Regex {
    static OCC_SUFFIX: OnceLock<Regex> = OnceLock::new();
    OCC_SUFFIX.get_or_init(|| {
        Regex::new(r"^([A-Z/][A-Z0-9/]*?)\d{6}[CP]\d+(?:\.\d+)?$").expect("OCC suffix regex is valid")
    })
}

/// A position symbol as exported by the broker.
///
/// Examples:
/// - Equity: "AAPL", "BRK.B"
/// - Option (OCC): "AAPL250117P00190000", "AAPL  250117P00190000"
/// - Option (descriptive): "AAPL 01/17/2025 190.00 P"
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is trimmed and normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the symbol is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Root (underlying) ticker with per-contract suffixes stripped.
    ///
    /// Leading `.`/`-` markers are dropped, only the first whitespace
    /// separated token is kept and a trailing OCC suffix is removed.
    #[must_use]
    pub fn root(&self) -> String {
        let trimmed = self.0.trim_start_matches(['.', '-']);
        let token = trimmed.split_whitespace().next().unwrap_or_default();

        occ_suffix()
            .captures(token)
            .and_then(|caps| caps.get(1))
            .map_or_else(|| token.to_string(), |m| m.as_str().to_string())
    }

    /// Check if this symbol carries a contract suffix (option symbol).
    #[must_use]
    pub fn is_option(&self) -> bool {
        self.root() != self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
