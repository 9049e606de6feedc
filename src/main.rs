//! lecturer-rate - Short AI-written lecturer reviews from student feedback
//!
//! Entry point for the lecturer-rate CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lecturer_rate::cli::{Cli, Commands, NameSource};
use lecturer_rate::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            lecturer_rate::cli::completions::print(shell);
        }
        command => {
            // Load configuration only for runtime commands.
            let settings = Settings::load()?;

            match command {
                Commands::Review {
                    file,
                    name,
                    chunk_size,
                } => {
                    lecturer_rate::cli::commands::generate_review(
                        &settings,
                        file,
                        NameSource::from_arg(name),
                        chunk_size,
                    )
                    .await?;
                }
                Commands::Config(config_cmd) => {
                    lecturer_rate::cli::commands::config_command(&settings, config_cmd)?;
                }
                Commands::Completions { .. } => unreachable!(),
            }
        }
    }

    Ok(())
}
