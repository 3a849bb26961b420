//! Application Layer
//!
//! Orchestrates the domain for one analysis run:
//!
//! - **DTOs**: broker leg records in, cluster summaries out
//! - **Use Cases**: parse, cluster, classify and map a snapshot

pub mod dto;
pub mod errors;
pub mod use_cases;

pub use dto::*;
pub use errors::AnalysisError;
pub use use_cases::*;
