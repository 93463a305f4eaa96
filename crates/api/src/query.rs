//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /movies` (`?genre=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListMoviesParams {
    pub genre: Option<String>,
}

impl ListMoviesParams {
    /// The genre filter, treating `?genre=` the same as no filter.
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }
}
