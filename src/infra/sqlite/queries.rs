use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params_from_iter, types::Value};

use crate::domain::entities::sheet::CellValue;
use crate::infra::sqlite::schema::open_connection;

fn to_sql_value(cell: &CellValue) -> Value {
    match cell {
        CellValue::Null => Value::Null,
        CellValue::Text(v) => Value::Text(v.clone()),
        CellValue::Integer(v) => Value::Integer(*v),
        CellValue::Real(v) => Value::Real(*v),
        CellValue::DateTime(v) => Value::Text(v.format("%Y-%m-%d %H:%M:%S").to_string()),
    }
}

/// Appends all rows in one transaction. Either every row lands or none does.
pub fn append_rows(db_path: &Path, rows: &[Vec<CellValue>]) -> Result<i64> {
    let mut conn = open_connection(db_path)?;
    let tx = conn
        .transaction()
        .context("failed to start append transaction")?;

    let mut insert_row = tx
        .prepare("INSERT INTO Materiel (nom, type, total, valeur, contrib) VALUES (?1, ?2, ?3, ?4, ?5)")
        .context("failed to prepare Materiel insert")?;

    for row in rows {
        let values: Vec<Value> = row.iter().map(to_sql_value).collect();
        insert_row
            .execute(params_from_iter(values))
            .context("failed to insert Materiel row")?;
    }
    drop(insert_row);

    tx.commit().context("failed to commit append transaction")?;

    Ok(rows.len() as i64)
}
