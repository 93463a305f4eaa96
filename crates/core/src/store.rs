//! In-memory movie collection.
//!
//! [`MovieStore`] is a plain owned value; the API layer decides how it is
//! shared. Lookups are linear scans, which is fine for a seed-sized set.

use uuid::Uuid;

use crate::error::CoreError;
use crate::movie::{Movie, MoviePatch, NewMovie};

/// Seed dataset compiled into the binary.
const SEED_JSON: &str = include_str!("../data/movies.json");

/// Ordered collection of movie records.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    /// Create a store holding `movies` in the given order.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Create a store from the bundled seed dataset.
    pub fn seeded() -> Result<Self, CoreError> {
        Self::from_seed_json(SEED_JSON)
    }

    /// Create a store from a JSON array of movie records.
    pub fn from_seed_json(json: &str) -> Result<Self, CoreError> {
        let movies: Vec<Movie> = serde_json::from_str(json).map_err(CoreError::Seed)?;
        Ok(Self::from_movies(movies))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Every record, in stored order.
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    /// Records tagged with `genre`, compared ignoring ASCII case.
    pub fn filter_by_genre(&self, genre: &str) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|m| m.has_genre_ignore_case(genre))
            .collect()
    }

    pub fn find(&self, id: Uuid) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Append a validated movie under a freshly generated id and return the
    /// stored record.
    pub fn insert(&mut self, new: NewMovie) -> &Movie {
        let mut id = Uuid::new_v4();
        while self.position(id).is_some() {
            id = Uuid::new_v4();
        }
        let index = self.movies.len();
        self.movies.push(Movie::from_new(id, new));
        &self.movies[index]
    }

    /// Remove the record with `id`, returning it if it existed.
    pub fn remove(&mut self, id: Uuid) -> Option<Movie> {
        let index = self.position(id)?;
        Some(self.movies.remove(index))
    }

    /// Merge `patch` into the record with `id` in place.
    pub fn update(&mut self, id: Uuid, patch: MoviePatch) -> Option<&Movie> {
        let index = self.position(id)?;
        let movie = &mut self.movies[index];
        movie.apply(patch);
        Some(&*movie)
    }

    fn position(&self, id: Uuid) -> Option<usize> {
        self.movies.iter().position(|m| m.id == id)
    }
}
