use std::fmt;
use std::path::PathBuf;

/// Everything that can abort an import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The source spreadsheet is missing, unreadable, or unparseable.
    FileAccess { path: PathBuf, detail: String },
    /// The header row lacks one or more required source columns.
    SchemaMismatch { missing: Vec<String> },
    /// The database file could not be opened or created.
    StorageAccess { path: PathBuf, detail: String },
    /// The storage engine rejected the append itself.
    Store(String),
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::FileAccess { path, detail } => {
                write!(f, "cannot read spreadsheet {}: {detail}", path.display())
            }
            ImportError::SchemaMismatch { missing } => {
                write!(
                    f,
                    "spreadsheet is missing required column(s): {}",
                    missing.join(", ")
                )
            }
            ImportError::StorageAccess { path, detail } => {
                write!(f, "cannot open database {}: {detail}", path.display())
            }
            ImportError::Store(detail) => {
                write!(f, "failed to append rows into Materiel: {detail}")
            }
        }
    }
}

impl std::error::Error for ImportError {}
