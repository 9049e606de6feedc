//! Data models for reviews

use serde::{Deserialize, Serialize};

use crate::{RateError, Result};

/// A single row of the review table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRow {
    /// Lecturer the review is about
    #[serde(rename = "Person_Name")]
    pub person_name: String,

    /// Free-text student comment
    #[serde(rename = "Review_Text")]
    pub review_text: String,

    /// Numeric rating given by the student
    #[serde(rename = "Rating")]
    pub rating: f64,
}

impl ReviewRow {
    /// Create a new review row
    pub fn new(person_name: impl Into<String>, review_text: impl Into<String>, rating: f64) -> Self {
        Self {
            person_name: person_name.into(),
            review_text: review_text.into(),
            rating,
        }
    }
}

/// All reviews for one lecturer, in table order.
///
/// Texts and ratings are stored as parallel sequences and always have the
/// same length.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSet {
    person_name: String,
    texts: Vec<String>,
    ratings: Vec<f64>,
}

impl ReviewSet {
    /// Build a review set, rejecting texts and ratings of different lengths.
    pub fn new(person_name: impl Into<String>, texts: Vec<String>, ratings: Vec<f64>) -> Result<Self> {
        if texts.len() != ratings.len() {
            return Err(RateError::MisalignedReviews {
                texts: texts.len(),
                ratings: ratings.len(),
            });
        }

        Ok(Self {
            person_name: person_name.into(),
            texts,
            ratings,
        })
    }

    pub fn person_name(&self) -> &str {
        &self.person_name
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    pub fn ratings(&self) -> &[f64] {
        &self.ratings
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// A contiguous slice of a review set, texts and ratings cut at the same positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewChunk<'a> {
    pub texts: &'a [String],
    pub ratings: &'a [f64],
}

impl ReviewChunk<'_> {
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}
