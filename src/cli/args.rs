//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// lecturer-rate - Short AI-written lecturer reviews from student feedback
#[derive(Parser, Debug)]
#[command(name = "lecturer-rate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a review for one lecturer
    Review {
        /// Review table to read (defaults to input.path from config)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Lecturer name (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Number of reviews summarized per request
        #[arg(short, long)]
        chunk_size: Option<usize>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
