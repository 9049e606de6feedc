//! Fixed-size chunking of review sequences

use std::num::NonZeroUsize;

use crate::reviews::models::{ReviewChunk, ReviewSet};

/// Number of reviews summarized per completion call unless configured otherwise
pub const DEFAULT_CHUNK_SIZE: usize = 10;

/// Lazy iterator over contiguous slices of a sequence.
pub type Chunks<'a, T> = std::slice::Chunks<'a, T>;

/// Split `items` into contiguous slices of `size` elements.
///
/// Every slice has exactly `size` elements except possibly the last, which
/// holds the remainder. An empty sequence yields no slices.
pub fn chunk<T>(items: &[T], size: NonZeroUsize) -> Chunks<'_, T> {
    items.chunks(size.get())
}

/// Iterator over the aligned chunks of a [`ReviewSet`].
#[derive(Debug, Clone)]
pub struct ReviewChunks<'a> {
    texts: Chunks<'a, String>,
    ratings: Chunks<'a, f64>,
}

impl<'a> Iterator for ReviewChunks<'a> {
    type Item = ReviewChunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let texts = self.texts.next()?;
        let ratings = self.ratings.next()?;
        Some(ReviewChunk { texts, ratings })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.texts.size_hint()
    }
}

impl ExactSizeIterator for ReviewChunks<'_> {}

impl ReviewSet {
    /// Split the set into chunks, cutting texts and ratings at the same positions.
    pub fn chunks(&self, size: NonZeroUsize) -> ReviewChunks<'_> {
        ReviewChunks {
            texts: chunk(self.texts(), size),
            ratings: chunk(self.ratings(), size),
        }
    }
}
