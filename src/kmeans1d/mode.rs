use serde::{Deserialize, Serialize};

/// Clustering objective.
///
/// The integer codes mirror the L-norm of the objective: `2` is squared error
/// (k-means), `1` is absolute error (k-medians).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")] // accept "mean","median"
pub enum Mode {
    /// Minimize Σ(x − mean)² per cluster; centroid is the arithmetic mean (DEFAULT).
    #[default]
    Mean,
    /// Minimize Σ|x − median| per cluster; centroid is the median
    /// (average of the two middle values for even counts).
    Median,
}

impl Mode {
    /// Integer code used by the Python surface (`2` = mean, `1` = median).
    #[inline]
    pub fn code(self) -> i64 {
        match self {
            Mode::Mean => 2,
            Mode::Median => 1,
        }
    }
}
