//! Application Errors

use thiserror::Error;

use crate::domain::position::PositionError;

/// Errors raised while analyzing a position snapshot.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The snapshot is not an array of record objects.
    #[error("Unrecognized record at index {index}: expected an object, found {found}")]
    UnrecognizedRecord {
        /// Zero-based index of the offending element (0 when the input is not an array).
        index: usize,
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// A record could not be turned into a leg.
    #[error(transparent)]
    InvalidLeg(#[from] PositionError),

    /// A record object could not be decoded.
    #[error("Failed to decode record: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AnalysisError::UnrecognizedRecord {
            index: 2,
            found: "string",
        };
        assert_eq!(
            err.to_string(),
            "Unrecognized record at index 2: expected an object, found string"
        );

        let err = AnalysisError::from(PositionError::MissingSymbol { row: 1 });
        assert_eq!(err.to_string(), "Invalid leg at row 1: symbol is empty");
    }
}
