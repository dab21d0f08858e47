// src/error.rs
use core::fmt;

/// Library-wide error for gr-kmeans1d.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KmError {
    /// `k` must be at least one.
    InvalidK { k: usize },

    /// Nothing to cluster.
    EmptyInput,

    /// More clusters requested than there are values.
    TooManyClusters { k: usize, n: usize },

    /// `min_cluster_size * k` exceeds the number of values (or overflows).
    MinClusterSizeTooLarge {
        min_cluster_size: usize,
        k: usize,
        n: usize,
    },

    /// Mode name or code not recognized by a front-end parser.
    InvalidMode(String),

    /// NaN/±inf in the input; `index` is the position in the caller's order.
    NonFiniteInput { index: usize },

    /// Internal invariant violation: the DP finished with `D[k][n] = +inf`
    /// or the backtrack walk did not consume every value. Upfront validation
    /// should make this unreachable.
    Infeasible { k: usize, n: usize },
}

impl KmError {
    /// True for the caller-error family (everything except [`KmError::Infeasible`]).
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, KmError::Infeasible { .. })
    }
}

impl fmt::Display for KmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmError::InvalidK { k } => {
                write!(f, "kmeans1d: invalid k={k}. hint: k must be >= 1")
            }
            KmError::EmptyInput => write!(
                f,
                "kmeans1d: input is empty. hint: pass at least one value to cluster"
            ),
            KmError::TooManyClusters { k, n } => write!(
                f,
                "kmeans1d: k={k} cannot be greater than the number of values (n={n})"
            ),
            KmError::MinClusterSizeTooLarge {
                min_cluster_size,
                k,
                n,
            } => write!(
                f,
                "kmeans1d: min_cluster_size={min_cluster_size} * k={k} exceeds the number of values (n={n}). \
hint: lower k or min_cluster_size"
            ),
            KmError::InvalidMode(raw) => write!(
                f,
                "kmeans1d: unknown mode {raw:?} (expected 'mean' (2) or 'median' (1))"
            ),
            KmError::NonFiniteInput { index } => write!(
                f,
                "kmeans1d: non-finite value at index {index}. \
hint: drop NaN/±inf before clustering"
            ),
            KmError::Infeasible { k, n } => write!(
                f,
                "kmeans1d: internal invariant violation: no feasible partition of n={n} into k={k} clusters"
            ),
        }
    }
}

impl std::error::Error for KmError {}

pub type KmResult<T> = Result<T, KmError>;
