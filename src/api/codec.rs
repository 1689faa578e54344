use super::types::{ErrorResponse, Movie, MovieDraft};

/// Encodes a snapshot of movies as a JSON array. An empty slice yields `[]`.
pub fn encode_movies(movies: &[Movie]) -> Result<String, serde_json::Error> {
    serde_json::to_string(movies)
}

/// Encodes the error envelope as `{"error":"...","message":"...","status":N}`.
///
/// Infallible: the envelope is plain strings and a number, so the serde path
/// cannot fail in practice; the fallback keeps the signature honest without
/// giving the error path an error path of its own.
pub fn encode_error(error: &ErrorResponse) -> String {
    serde_json::to_string(error).unwrap_or_else(|_| {
        format!(
            "{{\"error\":\"Internal Server Error\",\"message\":\"Server error\",\"status\":{}}}",
            error.status
        )
    })
}

/// Decodes a request body as a JSON array of movie candidates.
///
/// A `null` element decodes as `None` and is left for validation to reject.
/// A top-level `null` decodes as an empty batch, which the handler rejects
/// as "no movies provided" rather than as malformed JSON. Anything else that
/// is not an array of objects/nulls is a decode error, reported to the
/// caller rather than crashing the request.
pub fn decode_batch(bytes: &[u8]) -> Result<Vec<Option<MovieDraft>>, serde_json::Error> {
    let batch: Option<Vec<Option<MovieDraft>>> = serde_json::from_slice(bytes)?;
    Ok(batch.unwrap_or_default())
}
