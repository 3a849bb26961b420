//! Analyze Positions Use Case

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::application::dto::{ClusterDto, LegRecordDto};
use crate::application::errors::AnalysisError;
use crate::domain::classification::ClassifierChain;
use crate::domain::clustering::{ClusteringOptions, ClusteringService, StrategyCluster};
use crate::domain::position::Leg;
use crate::domain::strategy_mapping::StrategyIdMapper;
use crate::observability::{
    record_positions_analyzed, record_strategy_cluster, record_unmapped_strategy,
};

/// Use case for turning a position snapshot into named, mapped clusters.
#[derive(Debug, Clone)]
pub struct AnalyzePositionsUseCase {
    chain: Arc<ClassifierChain>,
    mapper: StrategyIdMapper,
    options: ClusteringOptions,
}

impl AnalyzePositionsUseCase {
    /// Create a new AnalyzePositionsUseCase.
    #[must_use]
    pub const fn new(
        chain: Arc<ClassifierChain>,
        mapper: StrategyIdMapper,
        options: ClusteringOptions,
    ) -> Self {
        Self {
            chain,
            mapper,
            options,
        }
    }

    /// Execute the use case on decoded records.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidLeg` if a record has no symbol.
    pub fn execute(&self, records: &[LegRecordDto]) -> Result<Vec<ClusterDto>, AnalysisError> {
        let legs = records
            .iter()
            .enumerate()
            .map(|(row, record)| record.to_leg(row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.analyze(&legs).iter().map(ClusterDto::from).collect())
    }

    /// Execute the use case on a raw JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::UnrecognizedRecord` unless the input is an
    /// array of objects, or any error from [`Self::execute`].
    pub fn execute_json(&self, snapshot: &Value) -> Result<Vec<ClusterDto>, AnalysisError> {
        let Value::Array(items) = snapshot else {
            return Err(AnalysisError::UnrecognizedRecord {
                index: 0,
                found: json_type(snapshot),
            });
        };

        let records = items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(_) => Ok(LegRecordDto::deserialize(item)?),
                other => Err(AnalysisError::UnrecognizedRecord {
                    index,
                    found: json_type(other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.execute(&records)
    }

    /// Cluster, classify and map legs.
    ///
    /// Every leg appears in exactly one returned cluster.
    #[must_use]
    pub fn analyze(&self, legs: &[Leg]) -> Vec<StrategyCluster> {
        let service = ClusteringService::new(&self.chain, self.options.clone());
        let clusters: Vec<StrategyCluster> = service
            .cluster(legs)
            .into_iter()
            .map(|cluster| {
                let id = self
                    .mapper
                    .map(&cluster.name().to_string(), cluster.cost_direction())
                    .cloned();
                cluster.with_strategy_id(id)
            })
            .collect();

        record_positions_analyzed(legs.len());
        for cluster in &clusters {
            let strategy = cluster.name().to_string();
            record_strategy_cluster(&strategy, cluster.leg_count());
            if cluster.strategy_id().is_none() {
                record_unmapped_strategy(&strategy);
            }
        }

        tracing::info!(
            legs = legs.len(),
            clusters = clusters.len(),
            unmapped = clusters.iter().filter(|c| c.strategy_id().is_none()).count(),
            "positions analyzed"
        );

        clusters
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
