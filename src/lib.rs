//! MovieHub Library
//!
//! This library crate defines the core modules of the movie catalog service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three loosely coupled subsystems:
//!
//! - **`api`**: The wire-format layer. Contains the domain types, the
//!   per-record validation rules, and the JSON codec used for both success
//!   and error responses.
//! - **`store`**: The state layer. Implements a thread-safe in-memory
//!   collection of movie records (`MovieStore`) with monotonic id assignment.
//! - **`http`**: The request-handling layer. Builds the axum router,
//!   dispatches by path and method, and converts every failure into the
//!   uniform JSON error envelope.

pub mod api;
pub mod http;
pub mod store;
