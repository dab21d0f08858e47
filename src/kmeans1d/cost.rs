// src/kmeans1d/cost.rs
//! Interval cost model over sorted values.
//!
//! All interval arguments are **inclusive sorted positions** `[i, j]`.
//! Queries are O(1) from prefix sums; nothing re-scans or re-sorts an interval
//! except [`CostModel::centroid`], which runs once per cluster at assembly time.

use crate::kmeans1d::mode::Mode;
use crate::kmeans1d::sorted::SortedSample;

/// Running sums of shifted value and shifted value² over the sorted sample.
///
/// Values are shifted by the sample median before accumulation so that the
/// `sumSq − sum²/count` form does not lose everything to cancellation when
/// the data sits far from zero.
#[derive(Debug, Clone)]
pub struct PrefixAggregates {
    shift: f64,
    sum: Vec<f64>,
    sum_sq: Vec<f64>,
}

impl PrefixAggregates {
    pub fn new(sorted: &[f64]) -> Self {
        let n = sorted.len();
        let shift = if n == 0 { 0.0 } else { sorted[n / 2] };
        let mut sum = Vec::with_capacity(n + 1);
        let mut sum_sq = Vec::with_capacity(n + 1);
        sum.push(0.0);
        sum_sq.push(0.0);
        for (t, &x) in sorted.iter().enumerate() {
            let y = x - shift;
            sum.push(sum[t] + y);
            sum_sq.push(sum_sq[t] + y * y);
        }
        Self { shift, sum, sum_sq }
    }

    /// Σ(x − shift) over `[i, j]`.
    #[inline]
    pub fn shifted_sum(&self, i: usize, j: usize) -> f64 {
        self.sum[j + 1] - self.sum[i]
    }

    /// Σ(x − shift)² over `[i, j]`.
    #[inline]
    pub fn shifted_sum_sq(&self, i: usize, j: usize) -> f64 {
        self.sum_sq[j + 1] - self.sum_sq[i]
    }

    #[inline]
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Sum of squared deviations from the interval mean.
    #[inline]
    pub fn squared_deviation(&self, i: usize, j: usize) -> f64 {
        let count = (j - i + 1) as f64;
        let s = self.shifted_sum(i, j);
        let ssq = self.shifted_sum_sq(i, j) - s * s / count;
        ssq.max(0.0)
    }

    /// Sum of absolute deviations from `median`, where everything in `[i, split]`
    /// is `<= median` and everything in `(split, j]` is `>= median`.
    #[inline]
    pub fn absolute_deviation(&self, i: usize, split: usize, j: usize, median: f64) -> f64 {
        let m = median - self.shift;
        let lower_count = (split - i + 1) as f64;
        let upper_count = (j - split) as f64;
        let lower = m * lower_count - self.shifted_sum(i, split);
        let upper = if split < j {
            self.shifted_sum(split + 1, j) - m * upper_count
        } else {
            0.0
        };
        (lower + upper).max(0.0)
    }
}

/// `cost(i, j)` / `centroid(i, j)` for one sorted sample, mode and size bound.
#[derive(Debug, Clone)]
pub struct CostModel<'a> {
    sorted: &'a [f64],
    prefix: PrefixAggregates,
    mode: Mode,
    min_cluster_size: usize,
}

/// Lower/upper middle positions of `[i, j]`.
#[inline]
fn middle(i: usize, j: usize) -> (usize, usize) {
    let lo = (i + j) / 2;
    let hi = (i + j).div_ceil(2);
    (lo, hi)
}

impl<'a> CostModel<'a> {
    pub fn new(sample: &'a SortedSample, mode: Mode, min_cluster_size: usize) -> Self {
        Self::from_sorted(sample.values(), mode, min_cluster_size)
    }

    /// Build directly over a slice the caller guarantees is sorted ascending.
    pub fn from_sorted(sorted: &'a [f64], mode: Mode, min_cluster_size: usize) -> Self {
        debug_assert!(
            sorted.windows(2).all(|w| w[0] <= w[1]),
            "cost model requires sorted values"
        );
        Self {
            sorted,
            prefix: PrefixAggregates::new(sorted),
            mode,
            min_cluster_size,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn min_cluster_size(&self) -> usize {
        self.min_cluster_size
    }

    #[inline]
    pub fn sorted(&self) -> &[f64] {
        self.sorted
    }

    /// Median of `[i, j]` by index arithmetic (average of the two middle values
    /// for even counts).
    #[inline]
    pub fn median(&self, i: usize, j: usize) -> f64 {
        let (lo, hi) = middle(i, j);
        if lo == hi {
            self.sorted[lo]
        } else {
            (self.sorted[lo] + self.sorted[hi]) / 2.0
        }
    }

    /// Minimum within-cluster cost of `[i, j]`, or `+inf` when the interval is
    /// shorter than `min_cluster_size`.
    #[inline]
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i <= j, "invalid cluster range [{i}, {j}]");
        if j - i + 1 < self.min_cluster_size {
            return f64::INFINITY;
        }
        match self.mode {
            Mode::Mean => self.prefix.squared_deviation(i, j),
            Mode::Median => {
                let (lo, _) = middle(i, j);
                self.prefix
                    .absolute_deviation(i, lo, j, self.median(i, j))
            }
        }
    }

    /// Representative value of `[i, j]`: running mean or median.
    pub fn centroid(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i <= j, "invalid cluster range [{i}, {j}]");
        match self.mode {
            Mode::Mean => {
                let mut centroid = 0.0_f64;
                for (t, &x) in self.sorted[i..=j].iter().enumerate() {
                    centroid += (x - centroid) / (t + 1) as f64;
                }
                centroid
            }
            Mode::Median => self.median(i, j),
        }
    }
}
