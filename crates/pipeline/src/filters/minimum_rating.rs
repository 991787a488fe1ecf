//! Filter to enforce a rating lower bound.

use crate::traits::Filter;
use data_loader::Movie;

/// Removes movies rated below a threshold.
///
/// ## Algorithm
/// For each movie keep it only if `rating >= min_rating`.
/// A missing rating never satisfies the bound.
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Inclusive lower bound on the rating
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(&self, movies: Vec<Movie>) -> Vec<Movie> {
        movies
            .into_iter()
            .filter(|movie| movie.rating.is_some_and(|r| r >= self.min_rating))
            .collect()
    }
}
