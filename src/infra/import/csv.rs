use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::entities::sheet::{CellValue, SheetTable};

fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Null;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return CellValue::Integer(value);
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return CellValue::Real(value);
    }
    CellValue::Text(raw.to_string())
}

pub fn read_csv_table(csv_path: &Path) -> Result<SheetTable> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let header_len = headers.len();
    let headers: Vec<String> = headers.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        let row = (0..header_len)
            .map(|col_idx| parse_cell(record.get(col_idx).unwrap_or("")))
            .collect();
        rows.push(row);
    }

    Ok(SheetTable { headers, rows })
}
