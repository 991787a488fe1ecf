//! Filter implementations for the movie pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre;
pub mod maximum_rating;
pub mod minimum_rating;

// Re-export for convenience
pub use genre::GenreFilter;
pub use maximum_rating::MaximumRatingFilter;
pub use minimum_rating::MinimumRatingFilter;
