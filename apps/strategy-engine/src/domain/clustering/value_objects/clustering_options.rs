//! Clustering options.

use serde::{Deserialize, Serialize};

/// Tunables for the clustering phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusteringOptions {
    /// Candidate window sizes for same-expiration clusters, largest first.
    #[serde(default = "default_window_sizes")]
    pub window_sizes: Vec<usize>,
}

impl Default for ClusteringOptions {
    fn default() -> Self {
        Self {
            window_sizes: default_window_sizes(),
        }
    }
}

fn default_window_sizes() -> Vec<usize> {
    vec![4, 3]
}
