// src/kmeans1d/clusterer.rs
use serde::{Deserialize, Serialize};

use crate::kmeans1d::assemble::{assemble, Clustering};
use crate::kmeans1d::backtrack::backtrack;
use crate::kmeans1d::cost::CostModel;
use crate::kmeans1d::mode::Mode;
use crate::kmeans1d::sorted::SortedSample;
use crate::kmeans1d::table::DpTables;
use crate::kmtrace;
use crate::{KmError, KmResult};

/* =============================================================================
 * Options
 * ============================================================================= */

/// Parameters of one clustering call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterOptions {
    pub k: usize,
    #[serde(default)]
    pub min_cluster_size: usize,
    #[serde(default)]
    pub mode: Mode,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            k: 1,
            min_cluster_size: 0,
            mode: Mode::Mean,
        }
    }
}

impl ClusterOptions {
    /// Every precondition that can be checked without looking at the values.
    pub fn validate(&self, n: usize) -> KmResult<()> {
        let (k, min_cluster_size) = (self.k, self.min_cluster_size);
        if k == 0 {
            return Err(KmError::InvalidK { k });
        }
        if n == 0 {
            return Err(KmError::EmptyInput);
        }
        if k > n {
            return Err(KmError::TooManyClusters { k, n });
        }
        match min_cluster_size.checked_mul(k) {
            Some(total) if total <= n => Ok(()),
            _ => Err(KmError::MinClusterSizeTooLarge {
                min_cluster_size,
                k,
                n,
            }),
        }
    }
}

/* =============================================================================
 * Builder
 * ============================================================================= */

/// Builder for [`Kmeans1d`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Kmeans1dBuilder {
    opts: ClusterOptions,
}

impl Kmeans1dBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of clusters.
    #[inline]
    pub fn k(mut self, k: usize) -> Self {
        self.opts.k = k;
        self
    }

    /// Lower bound on members per cluster (`0` = unconstrained).
    #[inline]
    pub fn min_cluster_size(mut self, s: usize) -> Self {
        self.opts.min_cluster_size = s;
        self
    }

    /// Objective / centroid kind.
    #[inline]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.opts.mode = mode;
        self
    }

    #[inline]
    pub fn build(self) -> Kmeans1d {
        Kmeans1d { opts: self.opts }
    }
}

/* =============================================================================
 * Engine
 * ============================================================================= */

/// Exact 1-D clusterer. Holds only its options; every call allocates and drops
/// its own working tables, so one value can be shared across threads freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Kmeans1d {
    opts: ClusterOptions,
}

impl Kmeans1d {
    /// Entry point for fluent construction.
    #[inline]
    pub fn builder() -> Kmeans1dBuilder {
        Kmeans1dBuilder::default()
    }

    #[inline]
    pub fn with_options(opts: ClusterOptions) -> Self {
        Self { opts }
    }

    #[inline]
    pub fn options(&self) -> ClusterOptions {
        self.opts
    }

    /// Cluster `values` with the SMAWK-accelerated DP.
    pub fn cluster(&self, values: &[f64]) -> KmResult<Clustering> {
        self.run(values, DpTables::build)
    }

    /// Same contract as [`Kmeans1d::cluster`], filling the table with the plain
    /// O(k·n²) scan. Meant for cross-checking and benchmarks.
    pub fn cluster_naive(&self, values: &[f64]) -> KmResult<Clustering> {
        self.run(values, DpTables::build_naive)
    }

    fn run(
        &self,
        values: &[f64],
        fill: fn(&CostModel<'_>, usize) -> DpTables,
    ) -> KmResult<Clustering> {
        let opts = self.opts;
        opts.validate(values.len())?;
        kmtrace!(
            "[kmeans1d] cluster n={} k={} min_cluster_size={} mode={:?}",
            values.len(),
            opts.k,
            opts.min_cluster_size,
            opts.mode
        );

        let sample = SortedSample::from_values(values)?;
        let model = CostModel::new(&sample, opts.mode, opts.min_cluster_size);
        let tables = fill(&model, opts.k);
        let ranges = backtrack(&tables)?;
        kmtrace!("[kmeans1d] boundaries={:?}", ranges);

        Ok(assemble(&sample, &model, &ranges))
    }
}

/// Cluster `values` into `k` contiguous groups under `mode`, each holding at
/// least `min_cluster_size` values.
///
/// ```
/// use gr_kmeans1d::{cluster, Mode};
///
/// let xs = [4.0, 4.1, 4.2, -50.0, 200.2, 200.4, 200.9, 80.0, 100.0, 102.0];
/// let out = cluster(&xs, 4, 0, Mode::Mean).unwrap();
/// assert_eq!(out.labels(), &[1, 1, 1, 0, 3, 3, 3, 2, 2, 2]);
/// assert_eq!(out.centroids(), &[-50.0, 4.1, 94.0, 200.5]);
/// ```
pub fn cluster(values: &[f64], k: usize, min_cluster_size: usize, mode: Mode) -> KmResult<Clustering> {
    Kmeans1d::builder()
        .k(k)
        .min_cluster_size(min_cluster_size)
        .mode(mode)
        .build()
        .cluster(values)
}

/// Options form of [`cluster`].
#[inline]
pub fn cluster_with(values: &[f64], opts: &ClusterOptions) -> KmResult<Clustering> {
    Kmeans1d::with_options(*opts).cluster(values)
}
