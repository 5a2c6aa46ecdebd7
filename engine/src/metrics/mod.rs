pub mod rollup;
pub mod status;

// Re-export the main types for easy access
pub use rollup::*;
pub use status::*;
