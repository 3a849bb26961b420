//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod analyze_positions;

pub use analyze_positions::AnalyzePositionsUseCase;
