//! Configuration management for Lese.
//!
//! Settings live in a TOML file and are loaded once by the entry point,
//! then passed explicitly to whatever needs them. API keys are never stored
//! in the file; the settings only name the environment variables to read.

mod settings;

pub use settings::{GeneralSettings, ModelSettings, SearchSettings, Settings};
