//! CLI module for lecturer-rate
//!
//! Contains argument parsing and command implementations.

pub mod args;
pub mod commands;
pub mod completions;
pub mod name;

pub use args::{Cli, Commands, ConfigCommand};
pub use name::NameSource;
