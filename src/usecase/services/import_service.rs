use std::path::PathBuf;

use log::info;

use crate::domain::errors::ImportError;
use crate::domain::transform::select_and_rename;
use crate::infra::import::read_table;
use crate::usecase::ports::store::MaterielStore;

/// Where to read from and where to write to. `Default` points at the
/// locations the utility has always used relative to its working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    pub spreadsheet_path: PathBuf,
    pub database_path: PathBuf,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            spreadsheet_path: PathBuf::from("database_import/FichePartenairesSDC.xlsx"),
            database_path: PathBuf::from("sync_data/database.db"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportResult {
    pub row_count: i64,
}

pub struct ImportService<S: MaterielStore> {
    store: S,
    spreadsheet_path: PathBuf,
}

impl<S: MaterielStore> ImportService<S> {
    pub fn new(store: S, spreadsheet_path: PathBuf) -> Self {
        Self {
            store,
            spreadsheet_path,
        }
    }

    /// One full import run: parse, dump to stdout, project and rename, append.
    /// Nothing is written until the whole sheet has been read and every
    /// required column located.
    pub fn run(&self) -> Result<ImportResult, ImportError> {
        let table = read_table(&self.spreadsheet_path).map_err(|err| ImportError::FileAccess {
            path: self.spreadsheet_path.clone(),
            detail: err.to_string(),
        })?;
        info!(
            "parsed {} data rows from {}",
            table.row_count(),
            self.spreadsheet_path.display()
        );

        print!("{table}");

        let rows = select_and_rename(&table)?;

        self.store.init()?;
        let row_count = self.store.append(&rows)?;
        info!("appended {row_count} rows into Materiel");

        Ok(ImportResult { row_count })
    }
}
