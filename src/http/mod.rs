//! HTTP Module
//!
//! Builds the axum router and implements the request-handling pipeline.
//!
//! ## Core Concepts
//! - **Routing**: `/movies` is the only resource; GET lists, POST bulk-creates.
//!   Unknown paths fall back to 404, unsupported methods on `/movies` to 405.
//! - **Error envelope**: every non-2xx response is the same JSON shape,
//!   produced at the handler boundary. Nothing propagates past a handler.
//! - **Injection**: the `MovieStore` is passed in as an `Extension`, so tests
//!   can run the router against their own store instance.

pub mod handlers;


pub use handlers::router;
