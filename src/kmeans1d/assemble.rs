// src/kmeans1d/assemble.rs
use std::ops::Range;

use serde::Serialize;

use crate::kmeans1d::cost::CostModel;
use crate::kmeans1d::sorted::SortedSample;

/// Result of one clustering call, in the caller's original order.
///
/// - `labels[idx]` is the cluster of input value `idx`, in `[0, k)`.
/// - `centroids[c]` is non-decreasing in `c` (cluster 0 holds the smallest values).
/// - `sizes[c]` is the member count of cluster `c`; `cost` is the optimal objective.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clustering {
    labels: Vec<usize>,
    centroids: Vec<f64>,
    sizes: Vec<usize>,
    cost: f64,
}

impl Clustering {
    #[inline]
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    #[inline]
    pub fn centroids(&self) -> &[f64] {
        &self.centroids
    }

    #[inline]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Total within-cluster cost, summed over clusters.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of clusters.
    #[inline]
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Number of clustered values.
    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Original indices belonging to cluster `c`, ascending.
    pub fn members(&self, c: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(idx, &l)| (l == c).then_some(idx))
            .collect()
    }

    /// Centroid of the cluster each input value was assigned to.
    pub fn assigned_centroids(&self) -> Vec<f64> {
        self.labels.iter().map(|&l| self.centroids[l]).collect()
    }

    /// Split into `(labels, centroids)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<f64>) {
        (self.labels, self.centroids)
    }
}

/// Label every sorted position by its range, undo the sort, and compute centroids.
///
/// `ranges` must be the contiguous, ordered cover produced by the backtracker.
pub fn assemble(sample: &SortedSample, model: &CostModel<'_>, ranges: &[Range<usize>]) -> Clustering {
    let mut by_position = vec![0usize; sample.len()];
    let mut centroids = Vec::with_capacity(ranges.len());
    let mut sizes = Vec::with_capacity(ranges.len());
    let mut cost = 0.0_f64;

    for (c, r) in ranges.iter().enumerate() {
        debug_assert!(!r.is_empty(), "empty cluster range {r:?}");
        by_position[r.clone()].fill(c);
        centroids.push(model.centroid(r.start, r.end - 1));
        sizes.push(r.len());
        cost += model.cost(r.start, r.end - 1);
    }

    Clustering {
        labels: sample.unsort(&by_position),
        centroids,
        sizes,
        cost,
    }
}
