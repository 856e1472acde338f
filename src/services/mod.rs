pub mod export_service;
pub mod sync_service;

pub use export_service::ExportService;
pub use sync_service::SyncService;
