use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::kmeans1d::frontends::{mode_from_code, parse_mode_str, validate_counts};
use crate::kmeans1d::{ClusterOptions, Kmeans1d, Mode};

/// `mode` as passed from Python: the legacy integer code or a name.
#[derive(FromPyObject)]
enum ModeArg {
    Code(i64),
    Name(String),
}

impl ModeArg {
    fn resolve(self) -> PyResult<Mode> {
        let parsed = match self {
            ModeArg::Code(c) => mode_from_code(c),
            ModeArg::Name(s) => parse_mode_str(&s),
        };
        parsed.map_err(|e| PyValueError::new_err(e.to_string()))
    }
}

/// cluster(array, k, min_cluster_size=0, mode=2) -> (clusters, centroids)
///
/// `mode` is 2 / "mean" for k-means or 1 / "median" for k-medians.
#[pyfunction]
#[pyo3(signature = (array, k, min_cluster_size = 0, mode = None))]
fn cluster(
    py: Python<'_>,
    array: Vec<f64>,
    k: i64,
    min_cluster_size: i64,
    mode: Option<ModeArg>,
) -> PyResult<(Vec<usize>, Vec<f64>)> {
    let (k, min_cluster_size) = validate_counts(k, min_cluster_size).map_err(PyValueError::new_err)?;
    let mode = match mode {
        Some(m) => m.resolve()?,
        None => Mode::Mean,
    };
    let engine = Kmeans1d::with_options(ClusterOptions {
        k,
        min_cluster_size,
        mode,
    });
    let out = py
        .allow_threads(|| engine.cluster(&array))
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(out.into_parts())
}

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(cluster, m)?)?;
    Ok(())
}
