use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn open_connection(db_path: &Path) -> Result<Connection> {
    Connection::open(db_path).with_context(|| format!("failed to open db: {}", db_path.display()))
}

/// Creates the Materiel table if it is not there yet. The parent directory of
/// the database file is expected to exist already; a missing one surfaces as
/// an open failure.
pub fn init_db(db_path: &Path) -> Result<()> {
    let conn = open_connection(db_path)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS Materiel (
            nom     TEXT,
            type    TEXT,
            total   NUMERIC,
            valeur  NUMERIC,
            contrib NUMERIC
        );
        ",
    )
    .context("failed to initialize Materiel schema")?;

    Ok(())
}
