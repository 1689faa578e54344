//! API Module
//!
//! Defines the wire contract of the service.
//!
//! ## Core Concepts
//! - **Types**: `Movie` (stored record), `MovieDraft` (incoming candidate
//!   before validation and id assignment), `ErrorResponse` (uniform error
//!   envelope).
//! - **Validation**: a pure rule checker applied to each candidate; a batch
//!   is all-or-nothing and fails on the first invalid element.
//! - **Codec**: a closed set of explicit encode/decode functions, one per
//!   concrete wire shape. No runtime type inspection.

pub mod codec;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;
