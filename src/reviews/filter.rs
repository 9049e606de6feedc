//! Selecting one lecturer's reviews

use crate::reviews::models::{ReviewRow, ReviewSet};

/// Collect every review whose person name matches `target`.
///
/// Names are compared whole, after trimming, ignoring case. Rows with a
/// blank name never match, so a blank target finds nothing. Returns `None`
/// when no row matches.
pub fn filter_by_person(rows: &[ReviewRow], target: &str) -> Option<ReviewSet> {
    let wanted = normalize(target);
    if wanted.is_empty() {
        return None;
    }

    let (texts, ratings): (Vec<String>, Vec<f64>) = rows
        .iter()
        .filter(|row| normalize(&row.person_name) == wanted)
        .map(|row| (row.review_text.clone(), row.rating))
        .unzip();

    if texts.is_empty() {
        return None;
    }

    // unzip keeps both sides the same length
    ReviewSet::new(target.trim(), texts, ratings).ok()
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
