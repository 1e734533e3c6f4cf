//! Configuration module for sealkit
//!
//! Settings for the command-line layer:
//! - Config directory resolution
//! - Settings persistence

pub mod paths;
pub mod settings;

pub use paths::SealkitPaths;
pub use settings::{OutputFormat, Settings};
