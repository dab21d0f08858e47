// src/kmeans1d/table.rs
//! Cost table `D` and split table `T`, filled one cluster count at a time.
//!
//! - `D[i][m]`: minimum cost of the first `m` sorted values in exactly `i` clusters
//!   (`+inf` when infeasible).
//! - `T[i][m]`: 1-based sorted position where the last of those `i` clusters begins.

use crate::kmeans1d::cost::CostModel;
use crate::kmeans1d::smawk::row_minima;
use crate::kmtrace;

/// Dense row-major matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    num_cols: usize,
}

impl<T: Copy> Matrix<T> {
    pub fn filled(num_rows: usize, num_cols: usize, value: T) -> Self {
        Self {
            data: vec![value; num_rows * num_cols],
            num_cols,
        }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.num_cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[i * self.num_cols + j] = value;
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.num_cols..(i + 1) * self.num_cols]
    }
}

/// Filled `(k+1) × (n+1)` tables for one clustering call.
#[derive(Debug, Clone)]
pub struct DpTables {
    k: usize,
    n: usize,
    cost: Matrix<f64>,
    split: Matrix<usize>,
}

impl DpTables {
    /// Fill `D` and `T` for up to `k` clusters using the SMAWK row minimizer.
    pub fn build(model: &CostModel<'_>, k: usize) -> Self {
        let mut tables = Self::with_base_rows(model, k);
        let n = tables.n;
        for i in 2..=k {
            let prev = tables.cost.row(i - 1).to_vec();
            // Matrix rows: prefix length m = r + 1. Columns: split j = c + 1.
            let lookup = |r: usize, c: usize| -> f64 {
                let (m, j) = (r + 1, c + 1);
                if j > m {
                    return f64::INFINITY;
                }
                let head = prev[j - 1];
                if head.is_infinite() {
                    return f64::INFINITY;
                }
                head + model.cost(j - 1, m - 1)
            };
            let argmins = row_minima(n, n, lookup);
            for (r, &c) in argmins.iter().enumerate() {
                tables.cost.set(i, r + 1, lookup(r, c));
                tables.split.set(i, r + 1, c + 1);
            }
            tables.trace_row(i);
        }
        tables
    }

    /// Same tables via the plain O(k·n²) scan over every split (strict `<`, ascending `j`).
    pub fn build_naive(model: &CostModel<'_>, k: usize) -> Self {
        let mut tables = Self::with_base_rows(model, k);
        let n = tables.n;
        for i in 2..=k {
            for m in 1..=n {
                let mut best = f64::INFINITY;
                let mut best_j = 1usize;
                for j in 1..=m {
                    let head = tables.cost.get(i - 1, j - 1);
                    if head.is_infinite() {
                        continue;
                    }
                    let c = head + model.cost(j - 1, m - 1);
                    if c < best {
                        best = c;
                        best_j = j;
                    }
                }
                tables.cost.set(i, m, best);
                tables.split.set(i, m, best_j);
            }
            tables.trace_row(i);
        }
        tables
    }

    /// Rows 0 and 1 are closed-form; everything above stays `+inf` until filled.
    fn with_base_rows(model: &CostModel<'_>, k: usize) -> Self {
        let n = model.len();
        let mut cost = Matrix::filled(k + 1, n + 1, f64::INFINITY);
        let mut split = Matrix::filled(k + 1, n + 1, 0usize);
        cost.set(0, 0, 0.0);
        if k >= 1 {
            for m in 1..=n {
                cost.set(1, m, model.cost(0, m - 1));
                split.set(1, m, 1);
            }
        }
        let tables = Self { k, n, cost, split };
        if k >= 1 {
            tables.trace_row(1);
        }
        tables
    }

    fn trace_row(&self, i: usize) {
        kmtrace!(
            "[kmeans1d] dp row {}/{}: finite cells={}",
            i,
            self.k,
            self.cost.row(i).iter().filter(|c| c.is_finite()).count()
        );
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// `D[i][m]`.
    #[inline]
    pub fn cost(&self, i: usize, m: usize) -> f64 {
        self.cost.get(i, m)
    }

    /// `T[i][m]` (1-based start of the last cluster).
    #[inline]
    pub fn split(&self, i: usize, m: usize) -> usize {
        self.split.get(i, m)
    }

    /// `D[k][n]`.
    #[inline]
    pub fn optimal_cost(&self) -> f64 {
        self.cost.get(self.k, self.n)
    }
}
