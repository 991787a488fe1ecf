//! Core domain types for the movie table.
//!
//! Key Rust concepts demonstrated here:
//! - `Option<T>` as an explicit missing-value marker
//! - Derive macros for common traits
//! - Small inherent methods that borrow instead of copying

use serde::{Deserialize, Serialize};

/// Represents one row of the movie table.
///
/// Rust concept: `Option<T>` instead of a NaN sentinel. A cell that could not
/// be parsed as a number is `None`, so every comparison against it has to be
/// written out explicitly by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    /// Possibly multi-valued, stored as the raw delimited string
    /// (e.g. "Crime, Drama, Mystery").
    pub genre: String,
    /// Rating on the source scale (0-10 for IMDb)
    pub rating: Option<f64>,
    pub vote_count: Option<u64>,
}

impl Movie {
    /// Build a movie with both numeric fields present.
    pub fn new(title: impl Into<String>, genre: impl Into<String>, rating: f64, vote_count: u64) -> Self {
        Self {
            title: title.into(),
            genre: genre.into(),
            rating: Some(rating),
            vote_count: Some(vote_count),
        }
    }

    /// Case-insensitive substring containment against the genre string.
    ///
    /// `term` is expected to be lowercased already; callers matching many rows
    /// against the same term should lowercase it once.
    pub fn genre_contains_lowercase(&self, term: &str) -> bool {
        self.genre.to_lowercase().contains(term)
    }

    /// True when either numeric field is missing.
    pub fn has_missing_values(&self) -> bool {
        self.rating.is_none() || self.vote_count.is_none()
    }
}
