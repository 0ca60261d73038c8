//! Configuration storage adapters.

mod json_file;
mod memory;

pub use json_file::{CONFIG_DIR, CONFIG_FILE, JsonFileStorage};
pub use memory::MemoryConfigStorage;
