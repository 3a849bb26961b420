// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Strategy Engine - Rust Core Library
//!
//! Deterministic recognition of multi-leg option strategies in a brokerage
//! position snapshot.
//!
//! # Architecture (Clean Architecture + DDD)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure logic, no I/O
//!   - `position`: Stock and option legs
//!   - `classification`: Ordered guard/namer chain over a leg group
//!   - `clustering`: Phased, greedy partitioning of a snapshot
//!   - `strategy_mapping`: Strategy names to canonical identifiers
//!
//! - **Application**: Use cases and DTOs
//!   - `dto`: Broker leg records in, cluster summaries out
//!   - `use_cases`: `AnalyzePositions`
//!
//! - **Config / Observability**: YAML configuration, logging and metrics
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use strategy_engine::{AnalyzePositionsUseCase, ClassifierChain, ClusteringOptions, StrategyIdMapper};
//!
//! let use_case = AnalyzePositionsUseCase::new(
//!     Arc::new(ClassifierChain::standard()),
//!     StrategyIdMapper::standard(),
//!     ClusteringOptions::default(),
//! );
//! let clusters = use_case.execute_json(&snapshot)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and DTOs.
pub mod application;

/// Configuration loading and validation.
pub mod config;

/// Logging and metrics.
pub mod observability;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::classification::{Classification, ClassifierChain, StrategyName};
pub use domain::clustering::{ClusteringOptions, ClusteringService, StrategyCluster};
pub use domain::position::{Leg, LegGreeks, OptionSide, PositionError};
pub use domain::shared::Symbol;
pub use domain::strategy_mapping::{CostDirection, StrategyId, StrategyIdMapper};

// Application re-exports
pub use application::{AnalysisError, AnalyzePositionsUseCase, ClusterDto, LegRecordDto};
