mod create_record;
mod delete_record;
mod export_zone;
mod import_zone;
mod lookup_zone;
mod purge_records;

pub use create_record::{CreateRecordOptions, CreateRecordUseCase};
pub use delete_record::DeleteRecordUseCase;
pub use export_zone::ExportZoneUseCase;
pub use import_zone::{ImportOptions, ImportSummary, ImportZoneUseCase};
pub use lookup_zone::LookupZoneUseCase;
pub use purge_records::PurgeRecordsUseCase;
