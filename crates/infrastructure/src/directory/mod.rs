pub mod memory;

pub use memory::InMemoryZoneDirectory;
