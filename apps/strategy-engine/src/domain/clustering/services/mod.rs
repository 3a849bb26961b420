//! Clustering Services

mod clustering_service;
mod phases;

pub use clustering_service::ClusteringService;
