//! BoxKit Settings Crate
//!
//! Loads, validates and saves job configuration files.

pub mod config;
pub mod error;

pub use config::{Config, OutputFormat, OutputSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
