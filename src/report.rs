// src/report.rs
use serde::Serialize;

use crate::kmeans1d::{Clustering, CostModel, Mode, SortedSample};
use crate::KmResult;

/// Per-cluster summary row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterSummary {
    pub cluster: usize,
    pub size: usize,
    pub min: f64,
    pub max: f64,
    pub centroid: f64,
    /// Within-cluster cost under the clustering's objective.
    pub cost: f64,
}

/// Human-oriented view of a [`Clustering`] (sizes, value ranges, per-cluster cost).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterReport {
    pub n: usize,
    pub k: usize,
    pub mode: Mode,
    pub total_cost: f64,
    pub clusters: Vec<ClusterSummary>,
}

impl ClusterReport {
    /// Summarize `clustering`, which must have been computed over `values` with `mode`.
    pub fn build(values: &[f64], clustering: &Clustering, mode: Mode) -> KmResult<Self> {
        let sample = SortedSample::from_values(values)?;
        let model = CostModel::new(&sample, mode, 0);

        // Clusters are contiguous in sorted order, so each one is a run of positions.
        let mut clusters = Vec::with_capacity(clustering.k());
        let mut start = 0usize;
        for (c, &size) in clustering.sizes().iter().enumerate() {
            let end = start + size;
            clusters.push(ClusterSummary {
                cluster: c,
                size,
                min: sample.values()[start],
                max: sample.values()[end - 1],
                centroid: clustering.centroids()[c],
                cost: model.cost(start, end - 1),
            });
            start = end;
        }

        Ok(Self {
            n: clustering.len(),
            k: clustering.k(),
            mode,
            total_cost: clustering.cost(),
            clusters,
        })
    }

    pub fn smallest_cluster(&self) -> usize {
        self.clusters.iter().map(|c| c.size).min().unwrap_or(0)
    }

    pub fn to_line(&self) -> String {
        let sizes: Vec<String> = self.clusters.iter().map(|c| c.size.to_string()).collect();
        format!(
            "ClusterReport(n={}, k={}, mode={:?}, cost={:.6e}, sizes=[{}])",
            self.n,
            self.k,
            self.mode,
            self.total_cost,
            sizes.join(",")
        )
    }

    pub fn log(&self) {
        eprintln!("{}", self.to_line());
    }
}
