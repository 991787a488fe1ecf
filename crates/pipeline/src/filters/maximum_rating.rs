//! Filter to enforce a rating upper bound.

use crate::traits::Filter;
use data_loader::Movie;

/// Removes movies rated above a threshold. Missing ratings are removed too.
pub struct MaximumRatingFilter {
    max_rating: f64,
}

impl MaximumRatingFilter {
    /// Create a new MaximumRatingFilter with an inclusive upper bound.
    pub fn new(max_rating: f64) -> Self {
        Self { max_rating }
    }
}

impl Filter for MaximumRatingFilter {
    fn name(&self) -> &str {
        "MaximumRatingFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Vec<Movie> {
        movies
            .into_iter()
            .filter(|movie| movie.rating.is_some_and(|r| r <= self.max_rating))
            .collect()
    }
}
