//! Configuration model for linescope.
//!
//! This module defines the Config struct that represents `linescope.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, validation of config values, and
//! command-line overrides. Every collaborator receives the config explicitly.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::{DEFAULT_CONFIG_FILE, Overrides};
pub use types::ReviewEvent;
