use serde::{Deserialize, Serialize};

/// A stored movie record.
///
/// The `id` is assigned by the store and immutable afterwards. On the wire a
/// movie serializes as `id`, `title`, `year`, `director`; the duration is
/// accepted on input but not emitted on output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing, default)]
    pub duration_minutes: i64,
    pub year: i32,
    pub director: String,
}

impl Movie {
    /// Materializes a candidate record under a store-assigned id.
    pub fn from_draft(id: u64, draft: MovieDraft) -> Self {
        Self {
            id,
            title: draft.title.unwrap_or_default(),
            duration_minutes: draft.duration_minutes,
            year: draft.year,
            director: draft.director.unwrap_or_default(),
        }
    }
}

/// An incoming movie candidate, before validation.
///
/// Every field is defaulted so that sparse client objects decode; validation
/// decides what is acceptable. Any client-sent `id` is ignored, the store
/// assigns its own.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MovieDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "durationMinutes", alias = "duration")]
    pub duration_minutes: i64,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub director: Option<String>,
}

/// The uniform error envelope carried by every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status: u16,
}

impl ErrorResponse {
    /// Builds an envelope with the short label matching the status code.
    pub fn for_status(status: u16, message: impl Into<String>) -> Self {
        let error = match status {
            400 => "Bad Request",
            404 => "Not Found",
            405 => "Method Not Allowed",
            500 => "Internal Server Error",
            _ => "Error",
        };

        Self {
            error: error.to_string(),
            message: message.into(),
            status,
        }
    }
}
