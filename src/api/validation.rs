use chrono::Datelike;
use thiserror::Error;

use super::types::MovieDraft;

/// 1888 is the year of the earliest surviving film.
pub const FIRST_MOVIE_YEAR: i32 = 1888;

/// Upper bound for announced releases: current year plus this many years.
pub const MAX_YEARS_AHEAD: i32 = 5;

/// A single failed validation rule.
///
/// Carried as a value back to the handler instead of unwinding; the variant
/// identifies the rule and `Display` renders the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Movie cannot be null")]
    NullMovie,

    #[error("Movie title cannot be empty")]
    EmptyTitle,

    #[error("Movie year cannot be earlier than 1888 (the birth of cinema)")]
    YearTooEarly,

    #[error("Movie year cannot be in the distant future")]
    YearInFuture,
}

/// Checks one movie candidate against the acceptance rules, in order.
///
/// Rules:
/// 1. The element must be present (a JSON `null` in the batch is rejected).
/// 2. The title must be non-empty after trimming.
/// 3. The year must be after 1888.
/// 4. The year must not be more than five years in the future.
///
/// Only the wall-clock current year is read; there are no side effects.
/// Duration and director are deliberately not validated.
pub fn validate(draft: Option<&MovieDraft>) -> Result<(), ValidationError> {
    let Some(movie) = draft else {
        return Err(ValidationError::NullMovie);
    };

    match &movie.title {
        Some(title) if !title.trim().is_empty() => {}
        _ => return Err(ValidationError::EmptyTitle),
    }

    if movie.year <= FIRST_MOVIE_YEAR {
        return Err(ValidationError::YearTooEarly);
    }

    let current_year = chrono::Utc::now().year();
    if movie.year > current_year + MAX_YEARS_AHEAD {
        return Err(ValidationError::YearInFuture);
    }

    Ok(())
}
