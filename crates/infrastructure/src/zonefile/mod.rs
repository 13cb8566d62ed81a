pub mod reader;
pub mod writer;

pub use reader::parse_zone_text;
pub use writer::{format_record, write_zone_text};
