//! Loading the review table from a delimited file

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::reviews::models::ReviewRow;
use crate::{RateError, Result};

/// Columns every review table must provide
pub const REQUIRED_COLUMNS: [&str; 3] = ["Person_Name", "Review_Text", "Rating"];

/// Load all review rows from the file at `path`.
pub fn load_reviews(path: &Path) -> Result<Vec<ReviewRow>> {
    let file = File::open(path)?;
    let rows = read_reviews(file)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "Loaded review table");
    Ok(rows)
}

/// Read review rows from any CSV source with a header row.
pub fn read_reviews<R: Read>(source: R) -> Result<Vec<ReviewRow>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(source);

    validate_headers(reader.headers()?)?;

    let rows = reader
        .deserialize::<ReviewRow>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Check that every required column is present in the header row.
pub fn validate_headers(headers: &StringRecord) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(RateError::Schema { missing })
    }
}
