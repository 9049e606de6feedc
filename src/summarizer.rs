//! Two-level summarization of a lecturer's reviews
//!
//! Reviews are split into fixed-size chunks and each chunk is summarized
//! with its own completion call. The resulting mini-summaries are then
//! folded into the final review with one more call. Calls run strictly one
//! after another and the first failure ends the run.

use std::num::NonZeroUsize;

use crate::llm::prompts::{build_chunk_prompt, build_final_prompt};
use crate::llm::CompletionClient;
use crate::reviews::{filter_by_person, ReviewRow, ReviewSet};
use crate::{RateError, Result};

pub struct Summarizer<'a> {
    client: &'a dyn CompletionClient,
    chunk_size: NonZeroUsize,
}

impl<'a> Summarizer<'a> {
    pub fn new(client: &'a dyn CompletionClient, chunk_size: usize) -> Result<Self> {
        let chunk_size = NonZeroUsize::new(chunk_size).ok_or_else(|| {
            RateError::Config("summary.chunk_size must be greater than zero".to_string())
        })?;

        Ok(Self { client, chunk_size })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size.get()
    }

    /// Review the lecturer named `name` from the loaded table.
    ///
    /// Returns `Ok(None)` without contacting the model when no row matches.
    pub async fn review_lecturer(&self, rows: &[ReviewRow], name: &str) -> Result<Option<String>> {
        let Some(reviews) = filter_by_person(rows, name) else {
            tracing::debug!(lecturer = name, "No matching reviews");
            return Ok(None);
        };

        tracing::info!(
            lecturer = reviews.person_name(),
            reviews = reviews.len(),
            chunk_size = self.chunk_size(),
            "Generating review"
        );
        self.summarize(&reviews).await.map(Some)
    }

    /// Produce the final review for `reviews`.
    pub async fn summarize(&self, reviews: &ReviewSet) -> Result<String> {
        let mini_summaries = self.summarize_chunks(reviews).await?;

        tracing::info!(
            lecturer = reviews.person_name(),
            chunks = mini_summaries.len(),
            "Combining chunk summaries"
        );
        let prompt = build_final_prompt(reviews.person_name(), &mini_summaries);
        self.client.complete(&prompt).await
    }

    /// Summarize every chunk in order, one completion call per chunk.
    pub async fn summarize_chunks(&self, reviews: &ReviewSet) -> Result<Vec<String>> {
        if reviews.is_empty() {
            return Err(RateError::EmptyRatings);
        }

        let chunks = reviews.chunks(self.chunk_size);
        let total = chunks.len();
        let mut mini_summaries = Vec::with_capacity(total);

        for (index, chunk) in chunks.enumerate() {
            tracing::info!(
                chunk = index + 1,
                total,
                reviews = chunk.len(),
                model = self.client.model(),
                "Summarizing chunk"
            );

            let prompt = build_chunk_prompt(reviews.person_name(), chunk.texts, chunk.ratings)?;
            let summary = self.client.complete(&prompt).await?;

            tracing::debug!(chunk = index + 1, chars = summary.len(), "Chunk summarized");
            mini_summaries.push(summary);
        }

        Ok(mini_summaries)
    }
}
