use crate::domain::entities::sheet::{CellValue, SheetTable};
use crate::domain::errors::ImportError;

/// Source column → target column, in target-table order. Header matching is
/// exact, accents included.
pub const IMPORTED_COLUMNS: [(&str, &str); 5] = [
    ("Détail Mise à disposition", "nom"),
    ("Type", "type"),
    ("Dispo", "total"),
    ("Val.Remp.", "valeur"),
    ("Contrib.", "contrib"),
];

pub fn target_columns() -> [&'static str; 5] {
    IMPORTED_COLUMNS.map(|(_, target)| target)
}

/// Projects every row onto the five whitelisted source columns, in
/// `IMPORTED_COLUMNS` order. Fails before producing anything if any required
/// header is absent, naming all of them. Cells missing from a short row come
/// out as `Null`.
pub fn select_and_rename(table: &SheetTable) -> Result<Vec<Vec<CellValue>>, ImportError> {
    let mut indices = Vec::with_capacity(IMPORTED_COLUMNS.len());
    let mut missing = Vec::new();
    for (source, _) in IMPORTED_COLUMNS {
        match table.headers.iter().position(|header| header == source) {
            Some(idx) => indices.push(idx),
            None => missing.push(source.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(ImportError::SchemaMismatch { missing });
    }

    let rows = table
        .rows
        .iter()
        .map(|row| {
            indices
                .iter()
                .map(|&idx| row.get(idx).cloned().unwrap_or(CellValue::Null))
                .collect()
        })
        .collect();

    Ok(rows)
}
