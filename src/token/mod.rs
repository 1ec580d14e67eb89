//! Indirect token generation

pub mod generator;

// Re-export commonly used items
pub use generator::TokenGenerator;
