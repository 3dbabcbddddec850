use std::path::Path;

use anyhow::{anyhow, Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::entities::sheet::{CellValue, SheetTable};

pub fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(v) => CellValue::Text(v.clone()),
        Data::Int(v) => CellValue::Integer(*v),
        Data::Float(v) => CellValue::Real(*v),
        Data::Bool(v) => CellValue::Integer(i64::from(*v)),
        Data::DateTime(v) => match v.as_datetime() {
            Some(datetime) => CellValue::DateTime(datetime),
            None => CellValue::Text(v.to_string()),
        },
        Data::DateTimeIso(v) => CellValue::Text(v.clone()),
        Data::DurationIso(v) => CellValue::Text(v.clone()),
        Data::Error(v) => CellValue::Text(format!("{v:?}")),
    }
}

/// Reads the first worksheet of a workbook into headers plus typed rows. The
/// first sheet row is the header row.
pub fn read_first_sheet(xlsx_path: &Path) -> Result<SheetTable> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open spreadsheet: {}", xlsx_path.display()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| anyhow!("spreadsheet has no worksheets: {}", xlsx_path.display()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read sheet: {sheet_name}"))?;

    let mut rows_iter = range.rows();
    let headers: Vec<String> = rows_iter
        .next()
        .ok_or_else(|| anyhow!("spreadsheet has no header row: {}", xlsx_path.display()))?
        .iter()
        .map(|cell| cell_to_value(cell).to_string())
        .collect();

    let rows: Vec<Vec<CellValue>> = rows_iter
        .map(|row| row.iter().map(cell_to_value).collect())
        .collect();

    Ok(SheetTable { headers, rows })
}
