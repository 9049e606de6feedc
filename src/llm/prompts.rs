use crate::{RateError, Result};

const STYLE_INSTRUCTIONS: &str = "\
You are an AI that writes short, casual, student-friendly reviews for college lecturers.\n\
Use simple words, write like a real student would, and keep it short (2-3 sentences).\n\
Do NOT sound formal, business-like, or robotic.";

/// Arithmetic mean of the ratings.
pub fn mean_rating(ratings: &[f64]) -> Result<f64> {
    if ratings.is_empty() {
        return Err(RateError::EmptyRatings);
    }
    Ok(ratings.iter().sum::<f64>() / ratings.len() as f64)
}

/// Render a rating with one decimal place.
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the prompt summarizing one chunk of reviews.
pub fn build_chunk_prompt<S: AsRef<str>>(
    person_name: &str,
    reviews: &[S],
    ratings: &[f64],
) -> Result<String> {
    let average = format_rating(mean_rating(ratings)?);
    let reviews = bullet_list(reviews);

    Ok(format!(
        "{STYLE_INSTRUCTIONS}\n\
\n\
Lecturer: {person_name}\n\
\n\
Here are student reviews for this lecturer:\n\
{reviews}\n\
\n\
Average rating from students: {average}\n\
\n\
Task:\n\
1. Summarize all reviews into a concise 2-3 sentence review.\n\
2. Suggest a final rating out of 5 stars based on the text reviews and numeric ratings.\n\
3. Keep the tone academic, helpful, and appropriate for college students.\n"
    ))
}

/// Build the prompt folding per-chunk summaries into the final review.
pub fn build_final_prompt<S: AsRef<str>>(person_name: &str, summaries: &[S]) -> String {
    let summaries = bullet_list(summaries);

    format!(
        "{STYLE_INSTRUCTIONS}\n\
\n\
Lecturer: {person_name}\n\
\n\
Here are summarized chunks of student reviews:\n\
{summaries}\n\
\n\
Task:\n\
1. Summarize all the above into a concise 2-3 sentence review.\n\
2. Suggest a final rating out of 5 stars based on the reviews.\n\
3. Keep the tone academic, helpful, and appropriate for college students.\n"
    )
}
