//! CSV ingest and validation.
//!
//! This module turns the input table into a `Dataset` that is safe to fit.
//!
//! Design goals:
//! - **Strict schema** for the required `x`/`y` columns (clear errors)
//! - **Fail-fast rows**: any unparseable row aborts the run, no silent skipping
//! - **Deterministic behavior**: the derived ordinate sequence depends only
//!   on the row count
//! - **Separation of concerns**: no model or fitting logic here

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{Dataset, DatasetStats, SamplePoint};
use crate::error::AppError;

/// Ingest output: the dataset plus summary stats for diagnostics.
#[derive(Debug, Clone)]
pub struct IngestedData {
    pub dataset: Dataset,
    pub stats: DatasetStats,
}

/// Load the delimited table at `path` and derive the ordinate sequence.
///
/// Fails with a `FileNotFound` error when the path does not resolve, a
/// `Schema` error when the `x` or `y` column is absent, and a `Load` error
/// for any other parse failure. All failures are terminal.
pub fn load_dataset(path: &Path) -> Result<IngestedData, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::file_not_found(format!("Error: '{}' not found: {e}", path.display()))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| AppError::load(format!("Error: failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    let x_idx = require_column(&header_map, "x")?;
    let y_idx = require_column(&header_map, "y")?;

    let mut points = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        // +2 because records() starts after the header row and CSV line
        // numbers are 1-based.
        let line = idx + 2;
        let record = result
            .map_err(|e| AppError::load(format!("Error: CSV parse error at line {line}: {e}")))?;
        points.push(parse_row(&record, x_idx, y_idx, line)?);
    }

    if points.is_empty() {
        return Err(AppError::load("Error: input table contains no data rows."));
    }

    let stats = compute_stats(&points);
    Ok(IngestedData {
        dataset: Dataset::from_points(points),
        stats,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on
    // the first header (e.g. "﻿x"). Strip it so schema validation does not
    // incorrectly report a missing column.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn require_column(header_map: &HashMap<String, usize>, name: &str) -> Result<usize, AppError> {
    header_map.get(name).copied().ok_or_else(|| {
        AppError::schema(format!(
            "Error: CSV file does not contain required column `{name}`."
        ))
    })
}

fn parse_row(
    record: &StringRecord,
    x_idx: usize,
    y_idx: usize,
    line: usize,
) -> Result<SamplePoint, AppError> {
    let x = parse_field(record, x_idx, "x", line)?;
    let y = parse_field(record, y_idx, "y", line)?;
    Ok(SamplePoint { x, y })
}

fn parse_field(
    record: &StringRecord,
    idx: usize,
    name: &str,
    line: usize,
) -> Result<f64, AppError> {
    let raw = record
        .get(idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::load(format!("Error: missing `{name}` value at line {line}.")))?;

    let value: f64 = raw.parse().map_err(|_| {
        AppError::load(format!(
            "Error: invalid `{name}` value '{raw}' at line {line}."
        ))
    })?;

    if !value.is_finite() {
        return Err(AppError::load(format!(
            "Error: non-finite `{name}` value at line {line}."
        )));
    }
    Ok(value)
}

fn compute_stats(points: &[SamplePoint]) -> DatasetStats {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for p in points {
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }

    DatasetStats {
        n_points: points.len(),
        x_min,
        x_max,
        y_min,
        y_max,
    }
}
