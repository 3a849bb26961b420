//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for the input snapshot and the analysis output.

mod cluster_dto;
mod leg_record_dto;

pub use cluster_dto::{ClusterDto, LegSummaryDto};
pub use leg_record_dto::{LegRecordDto, parse_date, parse_decimal};
