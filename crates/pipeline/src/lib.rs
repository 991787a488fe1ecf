//! Pipeline for filtering and ranking the movie table.
//!
//! This crate provides:
//! - FilterCriteria describing the user's optional constraints
//! - Filter trait and implementations for narrowing the table
//! - FilterPipeline for composing filters
//! - ScoreWeights and rank_movies for ordering what survives
//!
//! ## Architecture
//! Movies are processed in two stages:
//! 1. Filters remove rows outside the rating bounds or genre terms
//! 2. Survivors are scored and stably sorted by descending score
//!
//! Everything here is a pure function of its inputs, so concurrent requests
//! can each run their own pipeline without sharing state.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{filter_and_rank, FilterCriteria};
//!
//! let criteria = FilterCriteria::new()
//!     .with_min_rating(8.0)
//!     .with_genre1("drama");
//!
//! for ranked in filter_and_rank(movies, &criteria) {
//!     println!("{} {:?}", ranked.movie.title, ranked.score);
//! }
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod ranking;
pub mod traits;

// Re-export main types
pub use criteria::FilterCriteria;
pub use filter_pipeline::FilterPipeline;
pub use ranking::{RankedMovie, ScoreWeights, filter_and_rank, rank_movies};
pub use traits::Filter;
