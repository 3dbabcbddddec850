use std::path::PathBuf;

use crate::domain::entities::sheet::CellValue;
use crate::domain::errors::ImportError;
use crate::infra::sqlite::queries::append_rows;
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::store::MaterielStore;

pub struct SqliteStore {
    pub db_path: PathBuf,
}

impl MaterielStore for SqliteStore {
    fn init(&self) -> Result<(), ImportError> {
        init_db(&self.db_path).map_err(|err| ImportError::StorageAccess {
            path: self.db_path.clone(),
            detail: err.to_string(),
        })
    }

    fn append(&self, rows: &[Vec<CellValue>]) -> Result<i64, ImportError> {
        append_rows(&self.db_path, rows).map_err(|err| ImportError::Store(err.to_string()))
    }
}
