#![allow(clippy::unused_unit)]

use polars::prelude::*;
use pyo3_polars::derive::polars_expr;

use crate::kmeans1d::{cluster_with, ClusterOptions, Clustering};

const SUPPORTED_TYPES: &[DataType] = &[
    DataType::Float32,
    DataType::Int64,
    DataType::Int32,
    DataType::UInt64,
    DataType::UInt32,
];

#[polars_expr(output_type = UInt32)]
fn kmeans1d_labels(inputs: &[Series], kwargs: ClusterOptions) -> PolarsResult<Series> {
    labels_impl(inputs, &kwargs)
}

#[polars_expr(output_type = Float64)]
fn kmeans1d_centroids(inputs: &[Series], kwargs: ClusterOptions) -> PolarsResult<Series> {
    centroids_impl(inputs, &kwargs)
}

/// Non-null values of the input column (as f64) and their row positions.
fn collect_values(inputs: &[Series]) -> PolarsResult<(usize, Vec<usize>, Vec<f64>)> {
    let series = &inputs[0];
    let series_casted: Series = if series.dtype() == &DataType::Float64 {
        series.clone()
    } else {
        if !SUPPORTED_TYPES.contains(series.dtype()) {
            polars_bail!(InvalidOperation: "kmeans1d: only supported for numerical types");
        }
        series.cast(&DataType::Float64)?
    };
    let ca = series_casted.f64()?;
    let mut rows = Vec::with_capacity(ca.len());
    let mut values = Vec::with_capacity(ca.len());
    for (row, v) in ca.into_iter().enumerate() {
        if let Some(x) = v {
            rows.push(row);
            values.push(x);
        }
    }
    Ok((ca.len(), rows, values))
}

fn run(inputs: &[Series], opts: &ClusterOptions) -> PolarsResult<(usize, Vec<usize>, Clustering)> {
    let (len, rows, values) = collect_values(inputs)?;
    let out = cluster_with(&values, opts).map_err(|e| polars_err!(ComputeError: "{}", e))?;
    Ok((len, rows, out))
}

fn labels_impl(inputs: &[Series], opts: &ClusterOptions) -> PolarsResult<Series> {
    let (len, rows, out) = run(inputs, opts)?;
    let mut labels: Vec<Option<u32>> = vec![None; len];
    for (&row, &label) in rows.iter().zip(out.labels()) {
        labels[row] = Some(label as u32);
    }
    Ok(Series::new(inputs[0].name().clone(), labels))
}

fn centroids_impl(inputs: &[Series], opts: &ClusterOptions) -> PolarsResult<Series> {
    let (len, rows, out) = run(inputs, opts)?;
    let mut centroids: Vec<Option<f64>> = vec![None; len];
    for (&row, c) in rows.iter().zip(out.assigned_centroids()) {
        centroids[row] = Some(c);
    }
    Ok(Series::new(inputs[0].name().clone(), centroids))
}
