//! Observability module for logging and metrics.
//!
//! Structured logging through `tracing-subscriber` and analysis counters
//! through the `metrics` facade. No exporter is installed here; embedders
//! choose their own recorder.

mod logging;
mod metrics;

pub use logging::{LoggingError, init_logging};
pub use metrics::{record_positions_analyzed, record_strategy_cluster, record_unmapped_strategy};
