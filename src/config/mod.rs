//! Configuration module for lecturer-rate
//!
//! Handles loading settings from a TOML file, `.env` and the environment.

mod settings;

pub use settings::{Settings, API_KEY_ENV};
