//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to the movie table.

use data_loader::Movie;

/// Core trait for filtering movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used from concurrent request handlers
/// - Filters take ownership of the Vec<Movie> and return the rows they keep,
///   in their original order. They never reorder or modify a row.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter (takes ownership)
    ///
    /// # Returns
    /// The movies that satisfy this filter's constraint
    fn apply(&self, movies: Vec<Movie>) -> Vec<Movie>;
}
