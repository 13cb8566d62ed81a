mod zone_directory;

pub use zone_directory::{ChangeStatus, ChangeToken, ZoneDirectory};
