use crate::domain::entities::sheet::CellValue;
use crate::domain::errors::ImportError;

/// Storage seam for the Materiel table.
pub trait MaterielStore {
    /// Opens the database and creates the table if it does not exist yet.
    fn init(&self) -> Result<(), ImportError>;

    /// Appends the given target rows, returning how many were written. Existing
    /// rows are never touched.
    fn append(&self, rows: &[Vec<CellValue>]) -> Result<i64, ImportError>;
}
