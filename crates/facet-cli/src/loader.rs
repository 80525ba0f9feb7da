//! Dataset, configuration, and column-type loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use facet_model::{ColumnType, ColumnTypeMap, DataRecord, FilterConfiguration, ScalarValue};

/// Load and validate a filter configuration from JSON. Missing fields take
/// their defaults at deserialization time.
pub fn load_config(path: &Path) -> Result<FilterConfiguration> {
    let file =
        File::open(path).with_context(|| format!("open configuration {}", path.display()))?;
    let config: FilterConfiguration = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse configuration {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn load_coltype_map(path: &Path) -> Result<ColumnTypeMap> {
    let file =
        File::open(path).with_context(|| format!("open column-type map {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse column-type map {}", path.display()))
}

/// Load dataset rows. A `.csv` extension selects CSV ingestion with
/// type coercion from the column-type map; anything else is read as a JSON
/// array of row objects.
pub fn load_records(path: &Path, coltype_map: &ColumnTypeMap) -> Result<Vec<DataRecord>> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => load_csv_records(path, coltype_map),
        _ => load_json_records(path),
    }
}

fn load_json_records(path: &Path) -> Result<Vec<DataRecord>> {
    let file = File::open(path).with_context(|| format!("open dataset {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse dataset {}", path.display()))
}

fn load_csv_records(path: &Path, coltype_map: &ColumnTypeMap) -> Result<Vec<DataRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("open dataset {}", path.display()))?;
    let headers: Vec<String> = reader
        .headers()
        .context("read csv headers")?
        .iter()
        .map(normalize_header)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("read csv record")?;
        let row: DataRecord = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| {
                (
                    header.clone(),
                    coerce_cell(cell, coltype_map.get(header.as_str())),
                )
            })
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Coerce a CSV cell by its column type. Empty cells read as null;
/// unparseable cells fall back to text rather than failing.
fn coerce_cell(raw: &str, column_type: Option<&ColumnType>) -> ScalarValue {
    let cell = raw.trim().trim_matches('\u{feff}');
    if cell.is_empty() {
        return ScalarValue::Null;
    }
    match column_type {
        Some(ColumnType::Numeric) => cell
            .parse::<f64>()
            .map(ScalarValue::Number)
            .unwrap_or_else(|_| ScalarValue::from(cell)),
        Some(ColumnType::Boolean) => match cell.to_ascii_lowercase().as_str() {
            "true" | "1" | "y" | "yes" => ScalarValue::Bool(true),
            "false" | "0" | "n" | "no" => ScalarValue::Bool(false),
            _ => ScalarValue::from(cell),
        },
        _ => ScalarValue::from(cell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_trimmed_and_bom_stripped() {
        assert_eq!(normalize_header("\u{feff} status "), "status");
    }

    #[test]
    fn cells_coerce_by_column_type() {
        assert_eq!(coerce_cell("", None), ScalarValue::Null);
        assert_eq!(
            coerce_cell("42", Some(&ColumnType::Numeric)),
            ScalarValue::Number(42.0)
        );
        assert_eq!(
            coerce_cell("yes", Some(&ColumnType::Boolean)),
            ScalarValue::Bool(true)
        );
        assert_eq!(
            coerce_cell("maybe", Some(&ColumnType::Boolean)),
            ScalarValue::from("maybe")
        );
        assert_eq!(coerce_cell("42", None), ScalarValue::from("42"));
    }
}
