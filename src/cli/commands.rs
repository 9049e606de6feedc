//! CLI command implementations

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::cli::args::ConfigCommand;
use crate::cli::name::NameSource;
use crate::config::Settings;
use crate::llm::build_client;
use crate::reviews::load_reviews;
use crate::summarizer::Summarizer;

/// Banner printed above the generated review
pub const REVIEW_BANNER: &str = "--- AI-Generated Review ---";

/// Generate and print a review for one lecturer
pub async fn generate_review(
    settings: &Settings,
    file: Option<PathBuf>,
    name: NameSource,
    chunk_size: Option<usize>,
) -> Result<()> {
    let client = build_client(settings)?;
    let summarizer = Summarizer::new(
        client.as_ref(),
        chunk_size.unwrap_or(settings.summary.chunk_size),
    )?;

    let path = file.unwrap_or_else(|| settings.input.path.clone());
    let rows = load_reviews(&path)
        .with_context(|| format!("Failed to load reviews from {}", path.display()))?;

    let lecturer = name.resolve().context("Failed to read lecturer name")?;

    let Some(review) = summarizer.review_lecturer(&rows, &lecturer).await? else {
        println!("No reviews found for lecturer '{}'.", lecturer);
        return Ok(());
    };

    println!();
    println!("{}", REVIEW_BANNER);
    println!("{}", review);

    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let toml = toml::to_string_pretty(&settings.redacted())?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            let path = Settings::config_path()?;
            println!("{}", path.display());
        }
        ConfigCommand::Init { force } => {
            let path = Settings::config_path()?;
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            Settings::write_default(&path)?;
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}
