//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::criteria::FilterCriteria;
use crate::filters::{GenreFilter, MaximumRatingFilter, MinimumRatingFilter};
use crate::traits::Filter;
use data_loader::Movie;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(MinimumRatingFilter::new(8.0))
///     .add_filter(GenreFilter::new("drama"));
///
/// let filtered = pipeline.apply(movies);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for a set of user criteria.
    ///
    /// Only the constraints that are present become filters, in the order
    /// min_rating, max_rating, genre1, genre2. Two genre terms are therefore
    /// a logical AND.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new();

        if let Some(min_rating) = criteria.min_rating {
            pipeline = pipeline.add_filter(MinimumRatingFilter::new(min_rating));
        }
        if let Some(max_rating) = criteria.max_rating {
            pipeline = pipeline.add_filter(MaximumRatingFilter::new(max_rating));
        }
        for term in criteria.genre_terms() {
            pipeline = pipeline.add_filter(GenreFilter::new(term));
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the movies.
    ///
    /// ## Algorithm
    /// 1. Start with the input movies
    /// 2. For each filter in order:
    ///    a. Log filter name and input count
    ///    b. Apply the filter
    ///    c. Log output count
    /// 3. Return final filtered set
    pub fn apply(&self, movies: Vec<Movie>) -> Vec<Movie> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_movies() -> Vec<Movie> {
        vec![
            Movie::new("Interstellar", "Adventure, Drama, Sci-Fi", 8.6, 1_512_360),
            Movie::new("Amelie", "Comedy, Romance", 8.3, 703_810),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();

        let filtered = pipeline.apply(create_test_movies());
        assert_eq!(filtered, create_test_movies());
    }

    #[test]
    fn test_single_filter() {
        let pipeline = FilterPipeline::new().add_filter(GenreFilter::new("romance"));

        let filtered = pipeline.apply(create_test_movies());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Amelie");
    }

    #[test]
    fn test_from_criteria_only_adds_present_constraints() {
        assert!(FilterPipeline::from_criteria(&FilterCriteria::new()).is_empty());

        let criteria = FilterCriteria::new()
            .with_min_rating(8.0)
            .with_genre1("drama")
            .with_genre2(" ");
        assert_eq!(FilterPipeline::from_criteria(&criteria).len(), 2);

        let criteria = criteria.with_max_rating(9.0).with_genre2("sci");
        assert_eq!(FilterPipeline::from_criteria(&criteria).len(), 4);
    }
}
