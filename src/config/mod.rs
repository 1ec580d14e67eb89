//! Configuration for the access reference map

pub mod map_config;

// Re-export commonly used items
pub use map_config::{Encoding, MapConfig, DEFAULT_WIDTH};
