//! lecturer-rate - Short AI-written lecturer reviews from a table of student feedback
//!
//! Reviews are filtered by lecturer, summarized chunk by chunk, and the
//! partial summaries are folded into one final review.

pub mod cli;
pub mod config;
pub mod llm;
pub mod reviews;
pub mod summarizer;

use thiserror::Error;

/// Main error type for lecturer-rate
#[derive(Error, Debug)]
pub enum RateError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input file is missing required columns: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse input file: {0}")]
    Csv(#[from] csv::Error),

    #[error("Remote service error: {0}")]
    Remote(String),

    #[error("Review texts and ratings are misaligned ({texts} texts, {ratings} ratings)")]
    MisalignedReviews { texts: usize, ratings: usize },

    #[error("Cannot average an empty list of ratings")]
    EmptyRatings,
}

pub type Result<T> = std::result::Result<T, RateError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "lecturer-rate";
