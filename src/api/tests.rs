//! API Module Tests
//!
//! Validates the acceptance rules and the JSON wire format.
//!
//! ## Test Scopes
//! - **Validation**: rule order, distinct messages, and the year boundaries.
//! - **Codec**: exact encode shapes, tolerant decode, and the round trip.

#[cfg(test)]
mod tests {
    use crate::api::codec::{decode_batch, encode_error, encode_movies};
    use crate::api::types::{ErrorResponse, Movie, MovieDraft};
    use crate::api::validation::{validate, ValidationError, MAX_YEARS_AHEAD};
    use chrono::Datelike;

    fn draft(title: &str, year: i32) -> MovieDraft {
        MovieDraft {
            title: Some(title.to_string()),
            year,
            ..Default::default()
        }
    }

    // ============================================================
    // VALIDATION TESTS
    // ============================================================

    #[test]
    fn test_validate_accepts_complete_movie() {
        let movie = MovieDraft {
            title: Some("Inception".to_string()),
            duration_minutes: 148,
            year: 2010,
            director: Some("Nolan".to_string()),
        };

        assert_eq!(validate(Some(&movie)), Ok(()));
    }

    #[test]
    fn test_validate_rejects_absent_movie() {
        assert_eq!(validate(None), Err(ValidationError::NullMovie));
        assert_eq!(
            ValidationError::NullMovie.to_string(),
            "Movie cannot be null"
        );
    }

    #[test]
    fn test_validate_rejects_missing_title() {
        let movie = MovieDraft {
            year: 2010,
            ..Default::default()
        };

        assert_eq!(validate(Some(&movie)), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_validate_rejects_whitespace_title() {
        let movie = draft("   \n", 2010);

        let err = validate(Some(&movie)).unwrap_err();
        assert_eq!(err.to_string(), "Movie title cannot be empty");
    }

    #[test]
    fn test_validate_year_lower_boundary() {
        // 1888 itself is out, 1889 is the first acceptable year
        assert_eq!(
            validate(Some(&draft("Roundhay Garden Scene", 1888))),
            Err(ValidationError::YearTooEarly)
        );
        assert_eq!(validate(Some(&draft("Monkeyshines", 1889))), Ok(()));

        assert_eq!(
            ValidationError::YearTooEarly.to_string(),
            "Movie year cannot be earlier than 1888 (the birth of cinema)"
        );
    }

    #[test]
    fn test_validate_year_upper_boundary() {
        let horizon = chrono::Utc::now().year() + MAX_YEARS_AHEAD;

        assert_eq!(validate(Some(&draft("Announced", horizon))), Ok(()));
        assert_eq!(
            validate(Some(&draft("Vaporware", horizon + 1))),
            Err(ValidationError::YearInFuture)
        );
        assert_eq!(
            ValidationError::YearInFuture.to_string(),
            "Movie year cannot be in the distant future"
        );
    }

    #[test]
    fn test_validation_checks_title_before_year() {
        // Rule order matters for the client-facing message
        let movie = MovieDraft {
            year: 1700,
            ..Default::default()
        };

        assert_eq!(validate(Some(&movie)), Err(ValidationError::EmptyTitle));
    }

    // ============================================================
    // CODEC TESTS - encoding
    // ============================================================

    #[test]
    fn test_encode_empty_list() {
        assert_eq!(encode_movies(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_encode_movie_field_set() {
        let movie = Movie {
            id: 1,
            title: "Inception".to_string(),
            duration_minutes: 148,
            year: 2010,
            director: "Nolan".to_string(),
        };

        // Duration is dropped on output; the rest keeps the wire order
        assert_eq!(
            encode_movies(&[movie]).unwrap(),
            r#"[{"id":1,"title":"Inception","year":2010,"director":"Nolan"}]"#
        );
    }

    #[test]
    fn test_encode_escapes_quotes_and_newlines() {
        let movie = Movie {
            id: 7,
            title: "A \"quoted\"\ntitle".to_string(),
            duration_minutes: 0,
            year: 1999,
            director: String::new(),
        };

        let json = encode_movies(&[movie]).unwrap();
        assert!(json.contains(r#"A \"quoted\"\ntitle"#));
    }

    #[test]
    fn test_encode_error_envelope() {
        let envelope = ErrorResponse::for_status(400, "No movies provided");

        assert_eq!(
            encode_error(&envelope),
            r#"{"error":"Bad Request","message":"No movies provided","status":400}"#
        );
    }

    #[test]
    fn test_error_labels_per_status() {
        assert_eq!(ErrorResponse::for_status(400, "").error, "Bad Request");
        assert_eq!(ErrorResponse::for_status(404, "").error, "Not Found");
        assert_eq!(
            ErrorResponse::for_status(405, "").error,
            "Method Not Allowed"
        );
        assert_eq!(
            ErrorResponse::for_status(500, "").error,
            "Internal Server Error"
        );
        assert_eq!(ErrorResponse::for_status(418, "").error, "Error");
    }

    // ============================================================
    // CODEC TESTS - decoding
    // ============================================================

    #[test]
    fn test_decode_accepts_duration_alias() {
        let batch =
            decode_batch(br#"[{"title":"Inception","duration":148,"year":2010}]"#).unwrap();

        let movie = batch[0].as_ref().unwrap();
        assert_eq!(movie.duration_minutes, 148);
    }

    #[test]
    fn test_decode_accepts_long_duration_key() {
        let batch =
            decode_batch(br#"[{"title":"Inception","durationMinutes":148,"year":2010}]"#).unwrap();

        assert_eq!(batch[0].as_ref().unwrap().duration_minutes, 148);
    }

    #[test]
    fn test_decode_defaults_missing_fields() {
        let batch = decode_batch(br#"[{"title":"Inception"}]"#).unwrap();

        let movie = batch[0].as_ref().unwrap();
        assert_eq!(movie.year, 0);
        assert_eq!(movie.duration_minutes, 0);
        assert!(movie.director.is_none());
    }

    #[test]
    fn test_decode_null_element_survives_parsing() {
        // A null element is a validation failure, not a parse failure
        let batch = decode_batch(br#"[null]"#).unwrap();

        assert_eq!(batch.len(), 1);
        assert!(batch[0].is_none());
    }

    #[test]
    fn test_decode_top_level_null_is_empty_batch() {
        let batch = decode_batch(b"null").unwrap();

        assert!(batch.is_empty());
    }

    #[test]
    fn test_decode_rejects_malformed_json() {
        assert!(decode_batch(b"{this is not valid json}").is_err());
    }

    #[test]
    fn test_decode_rejects_non_array_input() {
        assert!(decode_batch(br#"{"title":"Inception"}"#).is_err());
    }

    #[test]
    fn test_decode_rejects_type_mismatch() {
        assert!(decode_batch(br#"[{"title":42}]"#).is_err());
    }

    // ============================================================
    // ROUND-TRIP TESTS
    // ============================================================

    #[test]
    fn test_round_trip_preserves_wire_fields() {
        let movie = Movie {
            id: 3,
            title: "The Matrix".to_string(),
            duration_minutes: 136,
            year: 1999,
            director: "Wachowski".to_string(),
        };

        let json = encode_movies(std::slice::from_ref(&movie)).unwrap();
        let batch = decode_batch(json.as_bytes()).unwrap();
        let decoded = batch[0].as_ref().unwrap();

        assert_eq!(decoded.title.as_deref(), Some("The Matrix"));
        assert_eq!(decoded.year, 1999);
        assert_eq!(decoded.director.as_deref(), Some("Wachowski"));
        // Duration is dropped by the encoder, so it comes back defaulted
        assert_eq!(decoded.duration_minutes, 0);
    }
}
