// src/kmeans1d/smawk.rs
//! Row minima of an implicitly defined totally monotone matrix (SMAWK).
//!
//! The matrix is only ever touched through `lookup(row, col)`. It must satisfy,
//! for every `r < r'` and `c < c'`:
//!
//! ```text
//!   lookup(r, c) > lookup(r, c')  ⇒  lookup(r', c) > lookup(r', c')
//! ```
//!
//! i.e. the leftmost minimum of each row never moves left as the row index grows.
//! `+inf` entries are fine as long as the implication above still holds.
//!
//! Ties always resolve to the **leftmost** column, so results are reproducible
//! and agree with a plain left-to-right scan using strict `<`.

/// Column index of the leftmost minimum in every row, in `O(rows + cols)` lookups.
pub fn row_minima<F>(rows: usize, cols: usize, lookup: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> f64,
{
    let mut argmin = vec![0usize; rows];
    if rows == 0 {
        return argmin;
    }
    assert!(cols > 0, "row_minima requires at least one column");
    let row_ids: Vec<usize> = (0..rows).collect();
    let col_ids: Vec<usize> = (0..cols).collect();
    smawk(&row_ids, &col_ids, &lookup, &mut argmin);
    argmin
}

fn smawk<F>(rows: &[usize], cols: &[usize], lookup: &F, argmin: &mut [usize])
where
    F: Fn(usize, usize) -> f64,
{
    if rows.is_empty() {
        return;
    }

    // REDUCE: keep at most `rows.len()` columns that can still hold a row minimum.
    // Survivor `s` is only a candidate for rows[s..].
    let mut survivors: Vec<usize> = Vec::with_capacity(rows.len());
    for &col in cols {
        while let Some(&top) = survivors.last() {
            let row = rows[survivors.len() - 1];
            if lookup(row, top) <= lookup(row, col) {
                break;
            }
            survivors.pop();
        }
        if survivors.len() < rows.len() {
            survivors.push(col);
        }
    }

    // Odd rows first; their answers bracket the even rows.
    let odd_rows: Vec<usize> = rows.iter().skip(1).step_by(2).copied().collect();
    smawk(&odd_rows, &survivors, lookup, argmin);

    // INTERPOLATE: each even row scans survivors between its neighbours' minima.
    let mut start = 0usize;
    for r in (0..rows.len()).step_by(2) {
        let row = rows[r];
        let stop = if r + 1 < rows.len() {
            let target = argmin[rows[r + 1]];
            let mut s = start;
            while survivors[s] != target {
                s += 1;
            }
            s
        } else {
            survivors.len() - 1
        };

        let mut best = survivors[start];
        let mut best_val = lookup(row, best);
        for &col in &survivors[start + 1..=stop] {
            let v = lookup(row, col);
            if v < best_val {
                best = col;
                best_val = v;
            }
        }
        argmin[row] = best;
        start = stop;
    }
}
