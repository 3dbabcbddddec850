mod domain;
mod infra;
mod usecase;


use std::process::ExitCode;

use log::error;

use crate::infra::sqlite::store::SqliteStore;
use crate::usecase::services::import_service::{ImportConfig, ImportService};

fn main() -> ExitCode {
    env_logger::init();

    let config = ImportConfig::default();
    let store = SqliteStore {
        db_path: config.database_path.clone(),
    };
    let service = ImportService::new(store, config.spreadsheet_path);

    match service.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("import failed: {err}");
            ExitCode::FAILURE
        }
    }
}
