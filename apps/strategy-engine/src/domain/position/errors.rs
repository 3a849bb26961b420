//! Position Errors

use thiserror::Error;

/// Errors that can occur while building position legs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A leg without a symbol cannot be attributed to any root.
    #[error("Invalid leg at row {row}: symbol is empty")]
    MissingSymbol {
        /// Zero-based row index in the snapshot.
        row: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PositionError::MissingSymbol { row: 3 };
        assert_eq!(err.to_string(), "Invalid leg at row 3: symbol is empty");
    }
}
