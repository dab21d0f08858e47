// src/bin/kmeans1d_cli.rs
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use gr_kmeans1d::kmeans1d::frontends::parse_mode_str;
use gr_kmeans1d::{ClusterReport, Kmeans1d, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// Pick from the file extension (.csv, .json, .ndjson/.jsonl); plain text otherwise
    Auto,
    /// Numbers separated by whitespace, ',' or ';'
    Text,
    Json,
    Ndjson,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Tab-separated
    Table,
    Csv,
    Json,
}

#[derive(Parser)]
#[command(name = "kmeans1d", author, version, about)]
struct Args {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// One row per input value: index, value, label, centroid
    Labels(RunArgs),
    /// One row per cluster: cluster, centroid, size
    Centroids(RunArgs),
    /// Per-cluster size, value range, centroid and cost
    Report(RunArgs),
}

#[derive(ClapArgs)]
struct RunArgs {
    /// Number of clusters
    #[arg(short = 'k', long = "clusters")]
    k: usize,

    /// Objective: mean (k-means, L2) or median (k-medians, L1)
    #[arg(short = 'm', long, default_value = "mean", value_parser = parse_mode)]
    mode: Mode,

    /// Minimum number of values per cluster
    #[arg(short = 's', long, default_value_t = 0)]
    min_cluster_size: usize,

    /// Read values from this file instead of stdin
    #[arg(long, conflicts_with = "stdin")]
    input: Option<PathBuf>,

    /// Read values from stdin (the default when --input is absent)
    #[arg(long)]
    stdin: bool,

    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    input_format: InputFormat,

    /// CSV header or JSON object key holding the values
    #[arg(long)]
    input_column: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,

    /// Omit the header row for table/csv output
    #[arg(long)]
    no_header: bool,
}

#[derive(Serialize)]
struct LabelRow {
    index: usize,
    value: f64,
    label: usize,
    centroid: f64,
}

#[derive(Serialize)]
struct CentroidRow {
    cluster: usize,
    centroid: f64,
    size: usize,
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    parse_mode_str(s).map_err(|e| e.to_string())
}

/* ---------------------------- input ---------------------------- */

fn parse_numbers(s: &str) -> Result<Vec<f64>, Box<dyn Error>> {
    let mut out = Vec::new();
    for tok in s
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|t| !t.is_empty())
    {
        out.push(tok.parse::<f64>()?);
    }
    Ok(out)
}

fn json_number(v: &Value, column: Option<&str>) -> Result<f64, Box<dyn Error>> {
    let picked = match (v, column) {
        (Value::Object(map), Some(col)) => map
            .get(col)
            .ok_or_else(|| format!("missing key {col:?} in {v}"))?,
        (Value::Object(_), None) => {
            return Err("JSON objects need --input-column".into());
        }
        (other, _) => other,
    };
    picked
        .as_f64()
        .ok_or_else(|| format!("not a number: {picked}").into())
}

fn parse_json(s: &str, column: Option<&str>) -> Result<Vec<f64>, Box<dyn Error>> {
    let doc: Value = serde_json::from_str(s)?;
    let items = match &doc {
        Value::Array(items) => items.clone(),
        Value::Object(map) => match column.and_then(|c| map.get(c)) {
            Some(Value::Array(items)) => items.clone(),
            _ => return Err("JSON object input needs --input-column naming an array".into()),
        },
        other => return Err(format!("expected a JSON array, got {other}").into()),
    };
    items.iter().map(|v| json_number(v, column)).collect()
}

fn parse_ndjson(s: &str, column: Option<&str>) -> Result<Vec<f64>, Box<dyn Error>> {
    s.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| json_number(&serde_json::from_str::<Value>(l)?, column))
        .collect()
}

fn parse_csv(s: &str, column: Option<&str>) -> Result<Vec<f64>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(s.as_bytes());
    let idx = match column {
        Some(col) => rdr
            .headers()?
            .iter()
            .position(|h| h == col)
            .ok_or_else(|| format!("column {col:?} not found in CSV header"))?,
        None => 0,
    };
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = rec.get(idx).ok_or("short CSV row")?;
        out.push(field.parse::<f64>()?);
    }
    Ok(out)
}

fn resolve_format(fmt: InputFormat, path: Option<&Path>) -> InputFormat {
    if fmt != InputFormat::Auto {
        return fmt;
    }
    let ext = path
        .and_then(|p| p.extension())
        .map(|e| e.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("csv") => InputFormat::Csv,
        Some("json") => InputFormat::Json,
        Some("ndjson") | Some("jsonl") => InputFormat::Ndjson,
        _ => InputFormat::Text,
    }
}

fn read_values(args: &RunArgs) -> Result<Vec<f64>, Box<dyn Error>> {
    let raw = match &args.input {
        Some(path) if !args.stdin => fs::read_to_string(path)?,
        _ => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            s
        }
    };
    let column = args.input_column.as_deref();
    match resolve_format(args.input_format, args.input.as_deref()) {
        InputFormat::Json => parse_json(&raw, column),
        InputFormat::Ndjson => parse_ndjson(&raw, column),
        InputFormat::Csv => parse_csv(&raw, column),
        InputFormat::Text | InputFormat::Auto => parse_numbers(&raw),
    }
}

/* ---------------------------- output ---------------------------- */

fn emit<T: Serialize>(rows: &[T], output: OutputFormat, no_header: bool) -> Result<(), Box<dyn Error>> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv | OutputFormat::Table => {
            let delimiter = if output == OutputFormat::Csv { b',' } else { b'\t' };
            let mut w = csv::WriterBuilder::new()
                .delimiter(delimiter)
                .has_headers(!no_header)
                .from_writer(out);
            for row in rows {
                w.serialize(row)?;
            }
            w.flush()?;
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let (Cmd::Labels(opts) | Cmd::Centroids(opts) | Cmd::Report(opts)) = &args.cmd;
    let values = read_values(opts)?;

    let clustering = Kmeans1d::builder()
        .k(opts.k)
        .min_cluster_size(opts.min_cluster_size)
        .mode(opts.mode)
        .build()
        .cluster(&values)?;

    match &args.cmd {
        Cmd::Labels(_) => {
            let rows: Vec<LabelRow> = values
                .iter()
                .zip(clustering.labels())
                .enumerate()
                .map(|(index, (&value, &label))| LabelRow {
                    index,
                    value,
                    label,
                    centroid: clustering.centroids()[label],
                })
                .collect();
            emit(&rows, opts.output, opts.no_header)
        }
        Cmd::Centroids(_) => {
            let rows: Vec<CentroidRow> = clustering
                .centroids()
                .iter()
                .zip(clustering.sizes())
                .enumerate()
                .map(|(cluster, (&centroid, &size))| CentroidRow {
                    cluster,
                    centroid,
                    size,
                })
                .collect();
            emit(&rows, opts.output, opts.no_header)
        }
        Cmd::Report(_) => {
            let report = ClusterReport::build(&values, &clustering, opts.mode)?;
            report.log();
            emit(&report.clusters, opts.output, opts.no_header)
        }
    }
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("{e}");
        std::process::exit(2);
    }
}
