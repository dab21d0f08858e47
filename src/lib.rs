//! Exact, globally optimal clustering of 1-D data.
//!
//! Sorted 1-D data always has an optimal k-means / k-medians partition made of
//! contiguous runs, so the problem reduces to a DP over prefixes. Each DP row is
//! filled with a SMAWK row-minima search, giving `O(k·n)` cost lookups after an
//! `O(n log n)` sort.

mod error;
#[cfg(feature = "python")]
mod expressions;
pub mod kmeans1d;
#[cfg(feature = "python")]
mod py;
pub mod report;

pub use error::{KmError, KmResult};
pub use kmeans1d::{cluster, cluster_with, ClusterOptions, Clustering, Kmeans1d, Mode};
pub use report::ClusterReport;

#[cfg(target_os = "linux")]
use jemallocator::Jemalloc;

#[global_allocator]
#[cfg(target_os = "linux")]
static ALLOC: Jemalloc = Jemalloc;

// ---------------------- Python glue (feature-gated) ----------------------
// Everything PyO3-related is compiled ONLY when the `python` feature is enabled.
#[cfg(feature = "python")]
use pyo3::prelude::*;
#[cfg(feature = "python")]
use pyo3::types::PyModule;

#[cfg(feature = "python")]
#[pymodule]
fn _internal(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    py::register(m)?;
    Ok(())
}
// ------------------------------------------------------------------------
