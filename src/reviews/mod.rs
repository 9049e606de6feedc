//! Reviews module for lecturer-rate
//!
//! Loads the review table, selects one lecturer's reviews, and splits them
//! into fixed-size chunks.

mod chunk;
mod filter;
mod models;
mod table;

pub use chunk::{chunk, Chunks, ReviewChunks, DEFAULT_CHUNK_SIZE};
pub use filter::filter_by_person;
pub use models::{ReviewChunk, ReviewRow, ReviewSet};
pub use table::{load_reviews, read_reviews, validate_headers, REQUIRED_COLUMNS};
