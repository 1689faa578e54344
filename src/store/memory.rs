use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::types::{Movie, MovieDraft};

/// Thread-safe in-memory movie collection with monotonic id assignment.
///
/// The counter increment and the map insert are not one atomic transaction;
/// each assigned id is unique and the record is visible under it before
/// `add` returns, which is all callers may rely on.
pub struct MovieStore {
    movies: DashMap<u64, Movie>,
    id_generator: AtomicU64,
}

impl MovieStore {
    pub fn new() -> Self {
        Self {
            movies: DashMap::new(),
            id_generator: AtomicU64::new(1),
        }
    }

    /// Returns a snapshot copy of all records, in id (insertion) order.
    pub fn get_all(&self) -> Vec<Movie> {
        let mut snapshot: Vec<Movie> = self
            .movies
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        snapshot.sort_by_key(|movie| movie.id);
        snapshot
    }

    /// Looks up a record by id. Absent means not found, never an error.
    pub fn get(&self, id: u64) -> Option<Movie> {
        self.movies.get(&id).map(|entry| entry.value().clone())
    }

    /// Stores a candidate under the next id and returns the stored record.
    pub fn add(&self, draft: MovieDraft) -> Movie {
        let id = self.id_generator.fetch_add(1, Ordering::SeqCst);
        let movie = Movie::from_draft(id, draft);
        self.movies.insert(id, movie.clone());
        movie
    }

    /// Overwrites the record at `id` if it exists, forcing the record's id.
    /// Returns `None` and makes no change when the id is unknown.
    pub fn update(&self, id: u64, draft: MovieDraft) -> Option<Movie> {
        let mut entry = self.movies.get_mut(&id)?;
        let movie = Movie::from_draft(id, draft);
        *entry = movie.clone();
        Some(movie)
    }

    /// Removes the record at `id`. True iff something was removed.
    pub fn delete(&self, id: u64) -> bool {
        self.movies.remove(&id).is_some()
    }

    /// Removes all records and resets the id counter to 1.
    ///
    /// Reserved for test harnesses; not exposed over the network.
    pub fn clear(&self) {
        self.movies.clear();
        self.id_generator.store(1, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}
