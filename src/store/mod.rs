//! Store Module
//!
//! Implements the authoritative in-memory collection of movie records.
//!
//! ## Core Concepts
//! - **Concurrency**: a `DashMap` keyed by id plus an atomic id counter; safe
//!   under concurrent request handlers without external locking.
//! - **Id assignment**: ids start at 1 and increase monotonically per store
//!   instance. Deleted ids are never reused.
//! - **Injection**: the store is constructed once in `main` and passed to the
//!   router; there is no process-wide singleton.

pub mod memory;
