// src/kmeans1d/backtrack.rs
use std::ops::Range;

use crate::kmeans1d::table::DpTables;
use crate::{KmError, KmResult};

/// Walk `T` from `(k, n)` down to row 1 and return the `k` half-open sorted
/// ranges, ordered by cluster id (cluster 0 = smallest values).
///
/// Each step strictly decreases `current`, so the walk ends after exactly `k` reads.
pub fn backtrack(tables: &DpTables) -> KmResult<Vec<Range<usize>>> {
    let (k, n) = (tables.k(), tables.n());
    let infeasible = KmError::Infeasible { k, n };
    if k == 0 || !tables.optimal_cost().is_finite() {
        return Err(infeasible);
    }

    let mut ranges = Vec::with_capacity(k);
    let mut current = n;
    for i in (1..=k).rev() {
        let start = tables.split(i, current);
        if start == 0 || start > current {
            return Err(infeasible);
        }
        ranges.push(start - 1..current);
        current = start - 1;
    }
    if current != 0 {
        return Err(infeasible);
    }
    ranges.reverse();
    Ok(ranges)
}
