pub mod import_service;
