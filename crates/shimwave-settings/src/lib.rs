//! Shimwave Settings Crate
//!
//! Loads and saves conversion and output settings as JSON or TOML.

pub mod error;
pub mod settings;

pub use error::{Result, SettingsError};
pub use settings::{ConfigFormat, OutputSettings, Settings};
