// src/kmeans1d/reference.rs
//! Cross-check helpers: the plain O(k·n²) dynamic program and partition comparison.

use std::collections::HashMap;

use crate::kmeans1d::assemble::Clustering;
use crate::kmeans1d::clusterer::{ClusterOptions, Kmeans1d};
use crate::KmResult;

/// Cluster with the naive DP over the same cost model as the fast engine.
pub fn cluster_naive(values: &[f64], opts: &ClusterOptions) -> KmResult<Clustering> {
    Kmeans1d::with_options(*opts).cluster_naive(values)
}

/// True when `a` and `b` induce the same partition, ignoring label identity.
pub fn same_partition(a: &[usize], b: &[usize]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut forward: HashMap<usize, usize> = HashMap::new();
    let mut backward: HashMap<usize, usize> = HashMap::new();
    for (&x, &y) in a.iter().zip(b) {
        if *forward.entry(x).or_insert(y) != y || *backward.entry(y).or_insert(x) != x {
            return false;
        }
    }
    true
}
