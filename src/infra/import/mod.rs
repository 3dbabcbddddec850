pub mod csv;
pub mod xlsx;

use std::path::Path;

use anyhow::Result;

use crate::domain::entities::sheet::SheetTable;

/// Picks a reader from the file extension: `.csv` goes through the csv
/// reader, everything else is treated as a workbook.
pub fn read_table(path: &Path) -> Result<SheetTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    if ext == "csv" {
        csv::read_csv_table(path)
    } else {
        xlsx::read_first_sheet(path)
    }
}
