// src/kmeans1d/frontends.rs
//! Small, shared parsing & normalization helpers for all front-ends (Python, Polars, CLI).
//! Keep this dependency-light and free of PyO3/Polars types.

use crate::kmeans1d::mode::Mode;
use crate::{KmError, KmResult};

/// Lowercase/normalize a free-form string by removing `_`, `-` and spaces.
#[inline]
fn norm(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace(['_', '-', ' '], "")
}

/* ----------------------- mode helpers ----------------------- */

/// Accepts: mean | kmeans | l2 | 2 | median | kmedians | l1 | 1
pub fn parse_mode_str(raw: &str) -> KmResult<Mode> {
    match norm(raw).as_str() {
        "mean" | "kmeans" | "l2" | "2" => Ok(Mode::Mean),
        "median" | "kmedians" | "l1" | "1" => Ok(Mode::Median),
        _ => Err(KmError::InvalidMode(raw.to_string())),
    }
}

/// Integer codes as used by the Python API: `2` = mean, `1` = median.
pub fn mode_from_code(code: i64) -> KmResult<Mode> {
    match code {
        2 => Ok(Mode::Mean),
        1 => Ok(Mode::Median),
        other => Err(KmError::InvalidMode(other.to_string())),
    }
}

pub fn mode_to_str(mode: Mode) -> &'static str {
    match mode {
        Mode::Mean => "mean",
        Mode::Median => "median",
    }
}

/* ---------------------- validation helpers ---------------------- */

/// Convert signed `k` / `min_cluster_size` from dynamically typed callers.
/// Shape checks against `n` still happen in [`crate::ClusterOptions::validate`].
pub fn validate_counts(k: i64, min_cluster_size: i64) -> Result<(usize, usize), String> {
    if k <= 0 {
        return Err(format!("kmeans1d: invalid k={k}. hint: k must be >= 1"));
    }
    if min_cluster_size < 0 {
        return Err(format!(
            "kmeans1d: invalid min_cluster_size={min_cluster_size}. hint: must be >= 0"
        ));
    }
    let k = usize::try_from(k).map_err(|_| format!("kmeans1d: k={k} does not fit in usize"))?;
    let s = usize::try_from(min_cluster_size).map_err(|_| {
        format!("kmeans1d: min_cluster_size={min_cluster_size} does not fit in usize")
    })?;
    Ok((k, s))
}
