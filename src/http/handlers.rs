use axum::body::Body;
use axum::extract::{Extension, Request};
use axum::http::header::{self, HeaderValue};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, MethodFilter};
use axum::Router;
use std::sync::Arc;

use crate::api::codec;
use crate::api::types::ErrorResponse;
use crate::api::validation::validate;
use crate::store::memory::MovieStore;

const MAX_REQUEST_SIZE: usize = 1_000_000;
const CT_JSON: &str = "application/json; charset=UTF-8";

/// Builds the route table over the given store.
///
/// Only GET and POST are wired for `/movies`; the store supports update and
/// delete, but those are intentionally not exposed.
pub fn router(store: Arc<MovieStore>) -> Router {
    Router::new()
        .route(
            "/movies",
            get(handle_get_movies)
                .post(handle_post_movies)
                // axum maps HEAD onto the GET handler by default; only GET
                // and POST are part of the contract, so HEAD gets 405 too.
                .on(MethodFilter::HEAD, handle_method_not_allowed)
                .fallback(handle_method_not_allowed),
        )
        .fallback(handle_unknown_path)
        .layer(Extension(store))
}

/// GET /movies: the full current snapshot, `[]` when empty.
pub async fn handle_get_movies(Extension(store): Extension<Arc<MovieStore>>) -> Response {
    let movies = store.get_all();
    match codec::encode_movies(&movies) {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(err) => server_error(&err.to_string()),
    }
}

/// POST /movies: bulk-create from a JSON array, all-or-nothing.
///
/// The checks run in a fixed order; the first failure wins and nothing from
/// a rejected batch is stored. On success every element is appended in array
/// order, each under its own assigned id.
pub async fn handle_post_movies(
    Extension(store): Extension<Arc<MovieStore>>,
    request: Request,
) -> Response {
    let (parts, body) = request.into_parts();

    let is_json = parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_ascii_lowercase().starts_with("application/json"))
        .unwrap_or(false);
    if !is_json {
        return bad_request("Content-Type must be application/json");
    }

    let body = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!("Failed to read request body: {}", err);
            return server_error(&err.to_string());
        }
    };

    if body.len() > MAX_REQUEST_SIZE {
        return bad_request(&format!(
            "Request body too large. Maximum size is {} bytes.",
            MAX_REQUEST_SIZE
        ));
    }
    if body.is_empty() {
        return bad_request("Request body is empty");
    }

    let batch = match codec::decode_batch(&body) {
        Ok(batch) => batch,
        Err(err) => return bad_request(&format!("Invalid JSON format: {}", err)),
    };

    if batch.is_empty() {
        return bad_request("No movies provided");
    }

    for draft in &batch {
        if let Err(err) = validate(draft.as_ref()) {
            return bad_request(&format!("Invalid movie data: {}", err));
        }
    }

    let created: Vec<_> = batch
        .into_iter()
        .flatten()
        .map(|draft| store.add(draft))
        .collect();
    tracing::debug!("Stored {} new movies", created.len());

    match codec::encode_movies(&created) {
        Ok(body) => json_response(StatusCode::CREATED, body),
        Err(err) => server_error(&err.to_string()),
    }
}

async fn handle_method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

async fn handle_unknown_path() -> Response {
    error_response(StatusCode::NOT_FOUND, "Endpoint not found")
}

fn json_response(status: StatusCode, body: String) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(CT_JSON));
    response
}

fn error_response(status: StatusCode, message: &str) -> Response {
    let envelope = ErrorResponse::for_status(status.as_u16(), message);
    json_response(status, codec::encode_error(&envelope))
}

fn bad_request(message: &str) -> Response {
    error_response(StatusCode::BAD_REQUEST, message)
}

fn server_error(detail: &str) -> Response {
    // Short description only; internals and stack traces never leak.
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        &format!("Server error: {}", detail),
    )
}
